//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health payload, wrapped in the standard envelope.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
