//! Handler for public short name resolution.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::ResolverState;

/// Redirects a short name to its stored URL.
///
/// # Endpoint
///
/// `GET /{name}`, mounted as the resolver's fallback, so every path reaches it
/// and leading slashes (`//name`) are accepted.
///
/// # Response
///
/// `302 Found` with `Location: <stored url>`.
///
/// # Errors
///
/// - 400 `Missing Path` / `Invalid Path Format`
/// - 404 `Not Found`
/// - 500 `Invalid URL in Database` if the stored URL fails re-validation
///
/// Error bodies never include a detail field.
pub async fn resolve_handler(State(state): State<ResolverState>, uri: Uri) -> Response {
    match resolve(&state, uri.path()).await {
        Ok(response) => response,
        Err(e) => e.without_detail().into_response(),
    }
}

async fn resolve(state: &ResolverState, path: &str) -> Result<Response, AppError> {
    let target = state.resolver_service.resolve(path).await?;

    let location = HeaderValue::from_str(target.as_str())
        .map_err(|_| AppError::data_integrity("Invalid URL in Database"))?;

    tracing::debug!(path, location = %target, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
