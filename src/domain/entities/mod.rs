//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs per use:
//! - [`User`] - a stored record
//! - [`NewUser`] - input for creating a record
//! - [`UserPatch`] - input for partial updates

pub mod user;

pub use user::{NewUser, User, UserPatch};
