//! Link listing, creation and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_name::{self, NameError, normalize_and_validate_name, normalize_name};
use crate::utils::url_canonical::canonicalize_url;

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub link: Link,
    /// Public address that resolves to the new link.
    pub redirect_url: String,
}

/// Service behind the authenticated management API.
///
/// Enforces the name and URL rules before the store is touched, so every
/// operation issues at most one storage call.
pub struct ManagementService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    resolver_host: String,
}

impl<R: LinkRepository + ?Sized> ManagementService<R> {
    /// Creates a new management service.
    ///
    /// `resolver_host` is the public host of the resolver, used to build
    /// redirect URLs returned to callers.
    pub fn new(repository: Arc<R>, resolver_host: impl Into<String>) -> Self {
        Self {
            repository,
            resolver_host: resolver_host.into(),
        }
    }

    /// Lists every stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Validates and stores a new link.
    ///
    /// Checks run in order: presence of both fields, name format, URL format.
    /// The name is lowercased and the URL canonicalized before insertion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with message:
    /// - `Missing Data` if `name` or `url` is empty
    /// - `Invalid name format` if the name does not match the short name pattern
    /// - `Invalid URL` if the URL is not an absolute HTTP(S) URL
    ///
    /// Returns [`AppError::Conflict`] if the normalized name is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_link(&self, name: &str, url: &str) -> Result<CreatedLink, AppError> {
        if name.is_empty() || url.is_empty() {
            return Err(AppError::bad_request("Missing Data"));
        }

        let name = normalize_and_validate_name(name).map_err(|e| match e {
            NameError::Empty => AppError::bad_request("Missing Data"),
            NameError::InvalidFormat => {
                AppError::bad_request("Invalid name format").with_detail(e.to_string())
            }
        })?;

        let url = canonicalize_url(url)
            .map_err(|e| AppError::bad_request("Invalid URL").with_detail(e.to_string()))?;

        let new_link = NewLink {
            name: name.clone(),
            url: url.to_string(),
        };

        let link = self
            .repository
            .insert(new_link)
            .await
            .map_err(|e| match e {
                AppError::Conflict { message, .. } => AppError::conflict(message)
                    .with_detail(format!("'{name}' is already registered")),
                other => other,
            })?;

        tracing::info!(name = %link.name, url = %link.url, "Link created");

        let redirect_url = short_name::redirect_url(&self.resolver_host, &link.name);

        Ok(CreatedLink { link, redirect_url })
    }

    /// Deletes a link by its normalized name and returns that name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`Missing Data`) if `name` is empty.
    /// Returns [`AppError::NotFound`] if no link has this name.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_link(&self, name: &str) -> Result<String, AppError> {
        if name.is_empty() {
            return Err(AppError::bad_request("Missing Data"));
        }

        let name = normalize_name(name);

        let deleted = self.repository.delete_by_name(&name).await?;
        if deleted == 0 {
            return Err(AppError::not_found("Not Found"));
        }

        tracing::info!(name = %name, "Link deleted");

        Ok(name)
    }

    /// Checks that the registry store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
