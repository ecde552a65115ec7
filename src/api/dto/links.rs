//! DTOs for link management endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Body of `POST /data/put`.
///
/// Both fields are optional at the type level so that an absent field is
/// reported as `Missing Data` rather than `Invalid Data`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `DELETE /data/delete`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteLinkRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload of `GET /data/all`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<Link>,
}

/// Payload of a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub name: String,
    pub url: String,
    pub redirect_url: String,
}

/// Payload of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub name: String,
}
