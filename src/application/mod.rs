//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and expose the operations the HTTP
//! handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::management_service::ManagementService`] - List, create and delete links
//! - [`services::resolver_service::ResolverService`] - Resolve a public path to its destination
//! - [`services::auth_service::AuthService`] - Bearer token verification

pub mod services;
