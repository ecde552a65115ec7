//! HTTP middleware: bearer authentication, fixed response headers and
//! request tracing.

pub mod auth;
pub mod headers;
pub mod tracing;
