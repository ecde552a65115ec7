//! Application error type and its JSON envelope rendering.
//!
//! Every failure leaving the HTTP layer is rendered as
//!
//! ```json
//! { "status": 400, "message": "Invalid name format", "error": "optional detail" }
//! ```
//!
//! The `error` field is only present when a detail was attached. Storage
//! failure causes are logged, never attached.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Serialized error envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized {
        message: String,
        detail: Option<String>,
    },
    #[error("{message}")]
    Validation {
        message: String,
        detail: Option<String>,
    },
    #[error("{message}")]
    NotFound {
        message: String,
        detail: Option<String>,
    },
    #[error("{message}")]
    Conflict {
        message: String,
        detail: Option<String>,
    },
    #[error("{message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
    /// A stored value failed re-validation on read.
    #[error("{message}")]
    DataIntegrity {
        message: String,
        detail: Option<String>,
    },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            detail: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            detail: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            detail: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: None,
        }
    }

    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            message: message.into(),
            detail: None,
        }
    }

    /// Attaches a detail string rendered as the `error` field.
    pub fn with_detail(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Unauthorized { detail, .. }
            | Self::Validation { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Conflict { detail, .. }
            | Self::Internal { detail, .. }
            | Self::DataIntegrity { detail, .. } => *detail = Some(value.into()),
        }
        self
    }

    /// Drops any attached detail. Used for responses served to the public.
    pub fn without_detail(mut self) -> Self {
        match &mut self {
            Self::Unauthorized { detail, .. }
            | Self::Validation { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Conflict { detail, .. }
            | Self::Internal { detail, .. }
            | Self::DataIntegrity { detail, .. } => *detail = None,
        }
        self
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } | Self::DataIntegrity { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        let (message, detail) = match self {
            Self::Unauthorized { message, detail }
            | Self::Validation { message, detail }
            | Self::NotFound { message, detail }
            | Self::Conflict { message, detail }
            | Self::Internal { message, detail }
            | Self::DataIntegrity { message, detail } => (message, detail),
        };

        ErrorBody {
            status: self.status_code().as_u16(),
            message: message.clone(),
            error: detail.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.to_error_body())).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::warn!(constraint = ?db.constraint(), "Unique constraint violation");
            return AppError::conflict("Name already exists");
        }

        tracing::error!(error = %e, "Storage error");
        AppError::internal("Unable to process request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::unauthorized("Unauthorized").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::bad_request("Missing Data").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("Not Found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("Name already exists").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::data_integrity("Invalid URL in Database").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_omits_missing_detail() {
        let body = AppError::bad_request("Missing Data").to_error_body();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["status"], 400);
        assert_eq!(value["message"], "Missing Data");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_with_detail_and_without_detail() {
        let err = AppError::bad_request("Invalid URL").with_detail("relative URL without a base");
        assert_eq!(
            err.to_error_body().error.as_deref(),
            Some("relative URL without a base")
        );

        let err = err.without_detail();
        assert!(err.to_error_body().error.is_none());
    }

    #[test]
    fn test_unauthorized_response_has_challenge_header() {
        let response = AppError::unauthorized("Unauthorized").into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_error_body().error.is_none());
    }
}
