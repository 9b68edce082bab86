use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in user. Lives only for the session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String, // email
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// One entry of the static credential list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_librarian: bool,
}

impl Credential {
    pub fn role(&self) -> Role {
        if self.is_librarian {
            Role::Admin
        } else {
            Role::Student
        }
    }

    pub fn to_user(&self) -> User {
        User {
            user_id: self.email.clone(),
            role: self.role(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
