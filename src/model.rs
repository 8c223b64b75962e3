//! The `users` row and the request payload used to create or replace one.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// One row of the `users` table. `id` is assigned by the database on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users` and `PUT /users/:id`. Both fields are required.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Reject blank fields. Format and uniqueness are not checked.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [("name", &self.name), ("email", &self.email)] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: email.into(),
        }
    }

    #[test]
    fn accepts_filled_fields() {
        assert!(new_user("John Doe", "johndoe@example.com").validate().is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = new_user("   ", "johndoe@example.com").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "name must not be empty"));
    }

    #[test]
    fn rejects_empty_email() {
        let err = new_user("John Doe", "").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "email must not be empty"));
    }

    #[test]
    fn email_format_is_not_enforced() {
        assert!(new_user("John Doe", "not-an-email").validate().is_ok());
    }

    #[test]
    fn missing_field_fails_to_deserialize() {
        let parsed: Result<NewUser, _> = serde_json::from_str(r#"{"email":"a@b.c"}"#);
        assert!(parsed.is_err());
    }
}
