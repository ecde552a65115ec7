//! Router construction for the management API and the resolver.
//!
//! # Management API
//!
//! - `GET    /data/all`    - List every link (public)
//! - `GET    /all`         - Alias of `/data/all`
//! - `GET    /health`      - Storage health check (public)
//! - `POST   /data/put`    - Create a link (Bearer token required)
//! - `POST   /put`         - Alias of `/data/put`
//! - `DELETE /data/delete` - Delete a link (Bearer token required)
//!
//! Anything else answers `404 Not Found` in the standard envelope.
//!
//! # Resolver
//!
//! Every path is handed to [`resolve_handler`].

use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::api::handlers::{
    create_link_handler, delete_link_handler, health_handler, list_links_handler,
    not_found_handler, resolve_handler,
};
use crate::api::middleware::{auth, headers, tracing};
use crate::state::{ManagementState, ResolverState};

/// Mutation routes, guarded by bearer authentication.
fn protected_routes(state: &ManagementState) -> Router<ManagementState> {
    Router::new()
        .route("/data/put", post(create_link_handler))
        .route("/put", post(create_link_handler))
        .route("/data/delete", delete(delete_link_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
}

fn public_routes() -> Router<ManagementState> {
    Router::new()
        .route("/data/all", get(list_links_handler))
        .route("/all", get(list_links_handler))
        .route("/health", get(health_handler))
}

/// Constructs the management API router.
///
/// Paths are matched exactly; see [`management_app`] for the served form.
pub fn management_router(state: ManagementState) -> Router {
    let router = Router::new()
        .merge(protected_routes(&state))
        .merge(public_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state);

    headers::apply(router).layer(tracing::layer())
}

/// Management API as served: [`management_router`] behind trailing-slash
/// trimming, so `/data/all/` routes like `/data/all`.
///
/// The trim must run before routing, and `Router::layer` runs after it, so
/// the normalized service is mounted as the fallback of an empty router.
pub fn management_app(state: ManagementState) -> Router {
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(management_router(state));

    Router::new().fallback_service(normalized)
}

/// Constructs the resolver router.
pub fn resolver_router(state: ResolverState) -> Router {
    let router = Router::new().fallback(resolve_handler).with_state(state);

    headers::apply(router).layer(tracing::layer())
}
