//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUserRepository`] - process-local user table
//!
//! [`seed_if_empty`] loads demo rows into an empty store at startup.

pub mod in_memory_user_repository;
pub mod seed;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use seed::seed_if_empty;
