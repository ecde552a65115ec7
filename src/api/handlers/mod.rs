//! HTTP request handlers.
//!
//! - [`links`] and [`health`] serve the management API
//! - [`resolve`] serves the public resolver

pub mod health;
pub mod links;
pub mod resolve;

pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, list_links_handler, not_found_handler};
pub use resolve::resolve_handler;
