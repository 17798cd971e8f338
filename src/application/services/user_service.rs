//! User management service.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::{UserFilter, UserRepository};
use crate::error::AppError;

/// One page of users plus the number of matches before pagination.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub items: Vec<User>,
    pub total: u64,
}

/// Input for creating a user, already checked by the request validators.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
}

/// Service for managing user records.
///
/// Enforces the stored-row invariants on top of request validation:
/// - Names and email are stored trimmed
/// - A name that trims to empty is never stored
/// - New users are always active
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists users matching `search`, one page at a time, ordered by id.
    ///
    /// `search` is trimmed; a blank search matches everyone. `page` is
    /// 1-based. Both paging arguments are expected to be normalized already.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_users(
        &self,
        search: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> Result<UserPage, AppError> {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let (items, total) = self
            .repository
            .list(UserFilter { search }, offset, page_size)
            .await?;

        Ok(UserPage { items, total })
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Creates a user with trimmed fields and `is_active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a name trims to empty.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_user(&self, input: CreateUser) -> Result<User, AppError> {
        let first_name = required_name("FirstName", &input.first_name)?;
        let last_name = required_name("LastName", &input.last_name)?;

        let user = self
            .repository
            .insert(NewUser {
                first_name,
                last_name,
                email: input.email.trim().to_string(),
                date_of_birth: input.date_of_birth,
                is_active: true,
            })
            .await?;

        Ok(user)
    }

    /// Applies a partial update. Fields absent from the patch keep their values.
    ///
    /// `build_patch` runs only once the user is known to exist, so a missing
    /// user is reported ahead of any problem with the request body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns the error from `build_patch` if it fails.
    /// Returns [`AppError::Validation`] if a supplied name trims to empty.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_user<F>(&self, id: i64, build_patch: F) -> Result<User, AppError>
    where
        F: FnOnce() -> Result<UserPatch, AppError> + Send,
    {
        let mut user = self.get_user(id).await?;
        let patch = build_patch()?;

        let first_name = patch
            .first_name
            .as_deref()
            .map(|name| required_name("FirstName", name))
            .transpose()?;
        let last_name = patch
            .last_name
            .as_deref()
            .map(|name| required_name("LastName", name))
            .transpose()?;

        user.apply(UserPatch {
            first_name,
            last_name,
            email: patch.email.map(|e| e.trim().to_string()),
            ..patch
        });

        self.repository.update(user.clone()).await?;

        Ok(user)
    }

    /// Permanently deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found(format!("User {id} not found."))
}

/// Trims a name, rejecting whitespace-only values.
fn required_name(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::field(field, format!("{field} cannot be empty.")));
    }
    Ok(trimmed.to_string())
}
