//! Infrastructure layer.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations and seeding

pub mod persistence;
