//! # User Management API
//!
//! A small CRUD service for user records built with Axum, protected by JWT
//! bearer tokens and self-documented with OpenAPI.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - User and token services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and seeding
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Features
//!
//! - Paged, searchable user listing
//! - Field-level validation reported as RFC 9457 problem documents
//! - HS256 JWT bearer authentication
//! - Access logging with request ids
//! - Swagger UI in development
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_ENV=development
//! cargo run
//!
//! TOKEN=$(cargo run --bin token -- issue -u alice --raw)
//! curl -H "Authorization: Bearer $TOKEN" localhost:3000/api/users
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, Claims, UserService};
    pub use crate::config::{Environment, JwtSettings};
    pub use crate::domain::entities::{NewUser, User, UserPatch};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
