//! Shared state for the two HTTP services.
//!
//! Each router gets its own state type; the only thing the two have in common
//! is the repository instance they were built from.

use std::sync::Arc;

use crate::application::services::{AuthService, ManagementService, ResolverService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;

/// State for the authenticated management API.
#[derive(Clone)]
pub struct ManagementState {
    pub management_service: Arc<ManagementService<dyn LinkRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl ManagementState {
    pub fn new(repository: Arc<dyn LinkRepository>, config: &Config) -> Self {
        Self::with_settings(repository, &config.api_token, &config.resolver_host)
    }

    /// Builds the state from the two settings the management API depends on.
    pub fn with_settings(
        repository: Arc<dyn LinkRepository>,
        api_token: &str,
        resolver_host: &str,
    ) -> Self {
        Self {
            management_service: Arc::new(ManagementService::new(repository, resolver_host)),
            auth_service: Arc::new(AuthService::new(api_token)),
        }
    }
}

/// State for the public resolver.
#[derive(Clone)]
pub struct ResolverState {
    pub resolver_service: Arc<ResolverService<dyn LinkRepository>>,
}

impl ResolverState {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            resolver_service: Arc::new(ResolverService::new(repository)),
        }
    }
}
