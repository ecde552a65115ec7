//! Business logic services for the application layer.

pub mod auth_service;
pub mod management_service;
pub mod resolver_service;

pub use auth_service::AuthService;
pub use management_service::{CreatedLink, ManagementService};
pub use resolver_service::ResolverService;
