//! HTTP layer for both services.
//!
//! # Modules
//!
//! - [`dto`] - Response envelope and request/response bodies
//! - [`extract`] - JSON body extractor with envelope-shaped rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, response headers and tracing
//! - [`routes`] - Management and resolver routers

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
