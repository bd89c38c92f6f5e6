use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AuthError, FormErrors, StorageError};
use crate::storage::{self, KeyValueStore, USER_KEY};

const MOCK_USER_ID: &str = "user123";
pub const MIN_PASSWORD_LEN: usize = 6;

/// The signed-in (mock) user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Mock authentication; any well-formed submission succeeds
pub struct AuthStore<S> {
    storage: S,
    current: Option<User>,
}

impl<S: KeyValueStore> AuthStore<S> {
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let current: Option<User> = storage::load_json(&storage, USER_KEY)?;
        if let Some(user) = &current {
            info!("Restored session for {}", user.email);
        }
        Ok(Self { storage, current })
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The display name is the local part of the email.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let mut errors = FormErrors::new();
        if email.trim().is_empty() {
            errors.add("email", "Please enter both email and password");
        }
        if password.is_empty() {
            errors.add("password", "Please enter both email and password");
        }
        errors.into_result()?;

        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.sign_in(email.to_string(), name)
    }

    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<&User, AuthError> {
        let mut errors = FormErrors::new();
        if name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if email.trim().is_empty() {
            errors.add("email", "Email is required");
        }
        if password != confirm_password {
            errors.add("confirmPassword", "Passwords do not match");
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }
        errors.into_result()?;

        self.sign_in(email.trim().to_string(), name.trim().to_string())
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(user) = self.current.take() {
            info!("Signed out {}", user.email);
        }
        self.storage.remove(USER_KEY)
    }

    fn sign_in(&mut self, email: String, name: String) -> Result<&User, AuthError> {
        let user = User {
            id: MOCK_USER_ID.to_string(),
            email,
            name,
            signed_in_at: Utc::now(),
        };
        storage::save_json(&mut self.storage, USER_KEY, &user)?;
        info!("Signed in {}", user.email);
        let user: &User = self.current.insert(user);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn login_derives_display_name_and_persists() {
        let mut auth = AuthStore::open(MemoryStorage::new()).unwrap();
        let user = auth.login("jane.doe@example.com", "secret").unwrap().clone();

        assert_eq!(user.id, "user123");
        assert_eq!(user.name, "jane.doe");

        let restored = AuthStore::open(auth.storage.clone()).unwrap();
        assert_eq!(restored.current_user().map(|u| u.email.as_str()), Some("jane.doe@example.com"));
    }

    #[test]
    fn login_requires_both_fields() {
        let mut auth = AuthStore::open(MemoryStorage::new()).unwrap();
        let err = auth.login("", "").unwrap_err();
        match err {
            AuthError::Invalid(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors.get("email"), Some("Please enter both email and password"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn signup_reports_mismatch_and_short_password_together() {
        let mut auth = AuthStore::open(MemoryStorage::new()).unwrap();
        let err = auth.signup("Jane", "jane@example.com", "abc", "abd").unwrap_err();
        let AuthError::Invalid(errors) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn signup_keeps_given_name_and_logout_forgets_user() {
        let mut auth = AuthStore::open(MemoryStorage::new()).unwrap();
        auth.signup("Jane Doe", "jane@example.com", "hunter22", "hunter22").unwrap();
        assert_eq!(auth.current_user().unwrap().name, "Jane Doe");

        auth.logout().unwrap();
        assert!(auth.current_user().is_none());
        assert!(auth.storage.get(USER_KEY).unwrap().is_none());
    }
}
