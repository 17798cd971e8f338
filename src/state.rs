//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, UserService};
use crate::config::JwtSettings;
use crate::infrastructure::persistence::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires services over the given repository.
    pub fn new(repository: Arc<InMemoryUserRepository>, jwt: &JwtSettings) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
            auth_service: Arc::new(AuthService::new(jwt)),
        }
    }
}
