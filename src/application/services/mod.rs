//! Business logic services for the application layer.

pub mod auth_service;
pub mod user_service;

pub use auth_service::{ACCESS_TOKEN_TTL_MINUTES, AuthService, Claims};
pub use user_service::{CreateUser, UserPage, UserService};
