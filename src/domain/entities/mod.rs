//! Core domain entities.
//!
//! - [`Link`] - A stored short name to URL mapping
//! - [`NewLink`] - A validated mapping about to be inserted

pub mod link;

pub use link::{Link, NewLink};
