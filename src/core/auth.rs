//! Credential check against a static list. Plaintext comparison: this is a
//! role gate for the CLI, not a security boundary.

use crate::errors::AppResult;
use crate::models::user::{Credential, Role, User};
use std::fs;
use std::path::Path;

const BUNDLED_USERS: &str = include_str!("../../res/users.json");

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: Vec<Credential>,
}

impl CredentialStore {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    pub fn bundled() -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(BUNDLED_USERS)?))
    }

    /// Load a JSON credential list (same shape as the bundled one).
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(serde_json::from_str(&content)?))
    }

    /// Use `users_file` when configured, the bundled list otherwise.
    pub fn load(users_file: Option<&str>) -> AppResult<Self> {
        match users_file {
            Some(p) => Self::from_file(&crate::utils::path::expand_tilde(p)),
            None => Self::bundled(),
        }
    }

    /// Linear scan for an entry of the given role with this exact
    /// email/password pair. Empty inputs never match.
    pub fn validate(&self, role: Role, email: &str, password: &str) -> Option<User> {
        if email.is_empty() || password.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|c| c.role() == role && c.email == email && c.password == password)
            .map(Credential::to_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        CredentialStore::new(vec![
            Credential {
                email: "lib@x.ca".into(),
                password: "pw".into(),
                first_name: "Lee".into(),
                last_name: "Brar".into(),
                is_librarian: true,
            },
            Credential {
                email: "stu@x.ca".into(),
                password: "pw2".into(),
                first_name: "Ana".into(),
                last_name: "Silva".into(),
                is_librarian: false,
            },
        ])
    }

    #[test]
    fn role_must_match_the_entry() {
        let s = store();
        assert!(s.validate(Role::Admin, "lib@x.ca", "pw").is_some());
        assert!(s.validate(Role::Student, "lib@x.ca", "pw").is_none());
        assert!(s.validate(Role::Admin, "stu@x.ca", "pw2").is_none());
    }

    #[test]
    fn empty_inputs_never_match() {
        let s = store();
        assert!(s.validate(Role::Student, "", "pw2").is_none());
        assert!(s.validate(Role::Student, "stu@x.ca", "").is_none());
    }

    #[test]
    fn user_carries_email_and_names() {
        let u = store().validate(Role::Student, "stu@x.ca", "pw2").unwrap();
        assert_eq!(u.user_id, "stu@x.ca");
        assert_eq!(u.display_name(), "Ana Silva");
    }
}
