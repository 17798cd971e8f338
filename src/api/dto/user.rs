//! DTOs for the user endpoints.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::application::services::CreateUser;
use crate::domain::entities::{User, UserPatch};

/// Letters, combining marks, whitespace, apostrophes and hyphens.
static NAME_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\s'\-]+$").unwrap());

const LETTERS_ONLY: &str = "Must contain letters only (letters, spaces, hyphens, apostrophes).";
const INVALID_EMAIL: &str = "Email is not a valid e-mail address.";

/// User representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            is_active: user.is_active,
        }
    }
}

/// Request body for `POST /api/users`.
///
/// Fields are `Option` so that a missing field is reported as a validation
/// problem rather than a parse failure. `isActive` is not accepted: new users
/// are always active.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "firstName": "John",
    "lastName": "Doe",
    "email": "user@example.com",
    "dateOfBirth": "1990-01-01"
}))]
pub struct CreateUserRequest {
    /// User's first name
    #[validate(
        required(message = "FirstName is required."),
        length(min = 2, message = "FirstName must be at least 2 characters long."),
        custom(function = "name_with_letters")
    )]
    pub first_name: Option<String>,

    /// User's last name
    #[validate(
        required(message = "LastName is required."),
        length(min = 2, message = "LastName must be at least 2 characters long."),
        custom(function = "name_with_letters")
    )]
    pub last_name: Option<String>,

    /// Email address
    #[validate(
        required(message = "Email is required."),
        custom(function = "email_address")
    )]
    pub email: Option<String>,

    /// YYYY-MM-DD
    pub date_of_birth: Option<NaiveDate>,
}

impl CreateUserRequest {
    /// Converts a validated request into service input.
    ///
    /// Call only after [`Validate::validate`] succeeded; missing fields
    /// become empty strings, which the service rejects.
    pub fn into_input(self) -> CreateUser {
        CreateUser {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            date_of_birth: self.date_of_birth,
        }
    }
}

/// Request body for `PUT /api/users/{id}`.
///
/// All fields are optional; only supplied fields change. `null` is treated
/// the same as an absent field.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "firstName": "Jane",
    "lastName": "Smith",
    "email": "jane.smith@example.com",
    "dateOfBirth": "1988-05-20",
    "isActive": true
}))]
pub struct UpdateUserRequest {
    /// User's first name
    #[validate(custom(function = "first_name_chars"))]
    pub first_name: Option<String>,

    /// User's last name
    #[validate(custom(function = "last_name_chars"))]
    pub last_name: Option<String>,

    /// Email address
    #[validate(custom(function = "email_address"))]
    pub email: Option<String>,

    /// YYYY-MM-DD
    pub date_of_birth: Option<NaiveDate>,

    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            date_of_birth: req.date_of_birth,
            is_active: req.is_active,
        }
    }
}

fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Create-path name rule: allowed characters only, and at least one letter.
fn name_with_letters(value: &str) -> Result<(), ValidationError> {
    if NAME_CHARS_REGEX.is_match(value) && value.chars().any(char::is_alphabetic) {
        Ok(())
    } else {
        Err(violation("name_letters", LETTERS_ONLY))
    }
}

fn first_name_chars(value: &str) -> Result<(), ValidationError> {
    name_chars(value, "FirstName must contain letters only.")
}

fn last_name_chars(value: &str) -> Result<(), ValidationError> {
    name_chars(value, "LastName must contain letters only.")
}

/// Update-path name rule: allowed characters only. Empty and whitespace-only
/// values pass here and are rejected by the service after trimming.
fn name_chars(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || NAME_CHARS_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(violation("name_chars", message))
    }
}

/// Email format check on the trimmed value; the service stores it trimmed.
fn email_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().validate_email() {
        Ok(())
    } else {
        Err(violation("email", INVALID_EMAIL))
    }
}
