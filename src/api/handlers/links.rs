//! Handlers for link management endpoints (list, create, delete).

use axum::extract::State;

use crate::api::dto::Envelope;
use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, DeleteLinkRequest, DeleteLinkResponse,
    LinkListResponse,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::ManagementState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /data/all` (alias `GET /all`)
///
/// # Response
///
/// ```json
/// { "status": 200, "message": "OK", "links": [{ "name": "docs", "url": "https://example.com/" }] }
/// ```
pub async fn list_links_handler(
    State(state): State<ManagementState>,
) -> Result<Envelope<LinkListResponse>, AppError> {
    let links = state.management_service.list_links().await?;

    Ok(Envelope::ok(LinkListResponse { links }))
}

/// Creates a new link.
///
/// # Endpoint
///
/// `POST /data/put` (alias `POST /put`), Bearer token required.
///
/// # Request Body
///
/// ```json
/// { "name": "My_Link", "url": "http://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "status": 201,
///   "message": "OK",
///   "name": "my_link",
///   "url": "http://example.com/a",
///   "redirectUrl": "https://go.example.com/my_link"
/// }
/// ```
///
/// # Errors
///
/// - 400 `Invalid Data` if the body is not JSON
/// - 400 `Missing Data`, `Invalid name format` or `Invalid URL`
/// - 409 `Name already exists`
/// - 500 on storage errors
pub async fn create_link_handler(
    State(state): State<ManagementState>,
    JsonBody(payload): JsonBody<CreateLinkRequest>,
) -> Result<Envelope<CreateLinkResponse>, AppError> {
    let created = state
        .management_service
        .create_link(
            payload.name.as_deref().unwrap_or_default(),
            payload.url.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Envelope::created(CreateLinkResponse {
        name: created.link.name,
        url: created.link.url,
        redirect_url: created.redirect_url,
    }))
}

/// Deletes a link by name.
///
/// # Endpoint
///
/// `DELETE /data/delete`, Bearer token required.
///
/// # Request Body
///
/// ```json
/// { "name": "My_Link" }
/// ```
///
/// # Errors
///
/// - 400 `Invalid Data` or `Missing Data`
/// - 404 if no link has the (lowercased) name
/// - 500 on storage errors
pub async fn delete_link_handler(
    State(state): State<ManagementState>,
    JsonBody(payload): JsonBody<DeleteLinkRequest>,
) -> Result<Envelope<DeleteLinkResponse>, AppError> {
    let name = state
        .management_service
        .delete_link(payload.name.as_deref().unwrap_or_default())
        .await?;

    Ok(Envelope::ok(DeleteLinkResponse { name }))
}

/// Fallback for unknown paths and methods on the management API.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not Found")
}
