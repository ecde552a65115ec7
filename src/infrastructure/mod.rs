//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! - [`persistence`] - Registry store implementations (PostgreSQL, in-memory)

pub mod persistence;
