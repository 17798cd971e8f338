//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter applied by [`UserRepository::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Substring matched against first name, last name or email.
    pub search: Option<String>,
}

/// Repository interface for user records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns one page of matching users ordered by ascending id, together
    /// with the number of matches before pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(
        &self,
        filter: UserFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<User>, u64), AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Inserts a user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces the stored row with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, user: User) -> Result<(), AppError>;

    /// Removes a user permanently. Returns `false` if the id was unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Number of stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<u64, AppError>;
}
