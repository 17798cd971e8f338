//! User entity and its creation / patch inputs.

use chrono::NaiveDate;

/// A stored user record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
}

impl User {
    /// Returns true if `needle` occurs in the first name, last name or email.
    ///
    /// Matching is ordinal and case-sensitive.
    pub fn matches(&self, needle: &str) -> bool {
        self.first_name.contains(needle)
            || self.last_name.contains(needle)
            || self.email.contains(needle)
    }

    /// Applies the supplied fields of a patch, leaving the rest untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

/// Input data for inserting a new user. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
}

impl NewUser {
    /// Binds the input to a store-assigned id.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            is_active: self.is_active,
        }
    }
}

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alan() -> User {
        NewUser {
            first_name: "Alan".to_string(),
            last_name: "Z".to_string(),
            email: "alan@example.com".to_string(),
            date_of_birth: None,
            is_active: true,
        }
        .into_user(1)
    }

    #[test]
    fn test_matches_any_field() {
        let user = alan();
        assert!(user.matches("Ala"));
        assert!(user.matches("Z"));
        assert!(user.matches("@example"));
        assert!(!user.matches("david"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        assert!(!alan().matches("alan@EXAMPLE"));
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut user = alan();
        user.apply(UserPatch {
            last_name: Some("Turing".to_string()),
            is_active: Some(false),
            ..Default::default()
        });

        assert_eq!(user.first_name, "Alan");
        assert_eq!(user.last_name, "Turing");
        assert_eq!(user.email, "alan@example.com");
        assert!(!user.is_active);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut user = alan();
        user.apply(UserPatch::default());
        assert_eq!(user, alan());
    }
}
