//! Public short name resolution.

use std::sync::Arc;
use url::Url;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_name::normalize_and_validate_name;
use crate::utils::url_canonical::canonicalize_url;

/// Service behind the public resolver.
///
/// Errors returned from here never carry a detail field; storage failures are
/// logged and reported as a bare internal error.
pub struct ResolverService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> ResolverService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a request path to its stored destination.
    ///
    /// # Flow
    ///
    /// 1. Strip leading `/` characters
    /// 2. Validate the remainder against the short name pattern
    /// 3. Look up the lowercased name
    /// 4. Re-validate the stored URL before handing it out
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] (`Missing Path`) if nothing remains after stripping
    /// - [`AppError::Validation`] (`Invalid Path Format`) if the pattern does not match
    /// - [`AppError::NotFound`] if no link has this name
    /// - [`AppError::DataIntegrity`] if the stored URL no longer parses
    /// - [`AppError::Internal`] on storage errors
    pub async fn resolve(&self, path: &str) -> Result<Url, AppError> {
        let requested = path.trim_start_matches('/');
        if requested.is_empty() {
            return Err(AppError::bad_request("Missing Path"));
        }

        let name = normalize_and_validate_name(requested)
            .map_err(|_| AppError::bad_request("Invalid Path Format"))?;

        let link = self
            .repository
            .find_by_name(&name)
            .await
            .map_err(|_| AppError::internal("Unable to process request"))?
            .ok_or_else(|| AppError::not_found("Not Found"))?;

        canonicalize_url(&link.url).map_err(|e| {
            tracing::error!(name = %link.name, error = %e, "Stored URL failed validation");
            AppError::data_integrity("Invalid URL in Database")
        })
    }
}
