//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request bodies
//! are read through [`crate::api::extract::JsonBody`].

pub mod envelope;
pub mod health;
pub mod links;

pub use envelope::Envelope;
