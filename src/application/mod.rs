//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD, paging and invariants
//! - [`services::auth_service::AuthService`] - Bearer token issuance and verification

pub mod services;
