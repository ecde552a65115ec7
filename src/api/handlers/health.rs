//! Handler for the health check endpoint.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::Envelope;
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::ManagementState;

/// Returns service health with a storage check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: storage reachable
/// - **503 Service Unavailable**: storage check failed
pub async fn health_handler(State(state): State<ManagementState>) -> Envelope<HealthResponse> {
    let storage = match state.management_service.check_storage().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    };

    let healthy = storage.status == "ok";
    let response = HealthResponse {
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { storage },
    };

    if healthy {
        Envelope::ok(response)
    } else {
        Envelope::with_status(StatusCode::SERVICE_UNAVAILABLE, response).with_message("Degraded")
    }
}

#[cfg(test)]
mod tests {
    use crate::api::routes::management_router;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;
    use crate::state::ManagementState;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::sync::Arc;

    fn server(mock: MockLinkRepository) -> TestServer {
        let state = ManagementState::with_settings(Arc::new(mock), "token", "go.example.com");
        TestServer::new(management_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_ping().times(1).returning(|| Ok(()));

        let response = server(mock_repo).get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], 200);
        assert_eq!(body["checks"]["storage"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_degraded_when_storage_unreachable() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(AppError::internal("Unable to process request")));

        let response = server(mock_repo).get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<Value>();
        assert_eq!(body["status"], 503);
        assert_eq!(body["message"], "Degraded");
        assert_eq!(body["checks"]["storage"]["status"], "error");
        assert_eq!(
            body["checks"]["storage"]["message"],
            "Unable to process request"
        );
    }
}
