//! Request body extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON object body extractor that ignores `Content-Type`.
///
/// The body must be a JSON object; arrays and scalars are rejected even when
/// `T` could be built from them positionally. Any rejection is reported as
/// `400 Invalid Data` in the standard error envelope, instead of axum's
/// plain-text rejection.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request("Invalid Data").with_detail(e.body_text()))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::bad_request("Invalid Data").with_detail(e.to_string()))?;

        if !value.is_object() {
            return Err(AppError::bad_request("Invalid Data")
                .with_detail("request body must be a JSON object"));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| AppError::bad_request("Invalid Data").with_detail(e.to_string()))
    }
}
