//! Helpers shared by the management API and the resolver.
//!
//! - [`short_name`] - Short name format rules and lowercase normalization
//! - [`url_canonical`] - Destination URL parsing and canonicalization

pub mod short_name;
pub mod url_canonical;
