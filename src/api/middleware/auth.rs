//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::ManagementState};

/// Authenticates requests using the configured bearer secret.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// Installed with `route_layer` on the mutation routes, so it runs before the
/// body is read: an unauthenticated request is rejected whatever its payload.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Header is not a Bearer credential
/// - Token does not match the configured secret
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/data/put", post(create_link_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<ManagementState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized("Unauthorized")
                .with_detail("Authorization header is missing or invalid")
        })?;

    st.auth_service.authenticate(&token).inspect_err(|_| {
        tracing::warn!(method = %parts.method, uri = %parts.uri, "Rejected bearer token");
    })?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
