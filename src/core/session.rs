//! Session state machine: Unauthenticated → RoleSelected → Authenticated.

use crate::core::auth::CredentialStore;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Bookings,
    Spaces,
}

impl View {
    /// Navigation label for a role, `None` when the role cannot open the view.
    pub fn label(&self, role: Role) -> Option<&'static str> {
        match (self, role) {
            (View::Bookings, Role::Student) => Some("View my bookings"),
            (View::Bookings, Role::Admin) => Some("View all bookings"),
            (View::Spaces, Role::Admin) => Some("View all spaces"),
            (View::Spaces, Role::Student) => None,
        }
    }

    pub fn allowed_for(&self, role: Role) -> bool {
        self.label(role).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    RoleSelected(Role),
    Authenticated { user: User, view: View },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_role(&mut self, role: Role) -> AppResult<()> {
        match self {
            Session::Unauthenticated | Session::RoleSelected(_) => {
                *self = Session::RoleSelected(role);
                Ok(())
            }
            Session::Authenticated { .. } => Err(AppError::InvalidTransition(
                "already logged in, log out before selecting another role".into(),
            )),
        }
    }

    /// Validate credentials for the selected role. On failure the session
    /// stays in `RoleSelected`.
    pub fn login(
        &mut self,
        credentials: &CredentialStore,
        email: &str,
        password: &str,
    ) -> AppResult<&User> {
        let role = match self {
            Session::RoleSelected(role) => *role,
            Session::Unauthenticated => {
                return Err(AppError::NotAuthenticated(
                    "select a role (Student or Admin) first".into(),
                ));
            }
            Session::Authenticated { .. } => {
                return Err(AppError::InvalidTransition("already logged in".into()));
            }
        };

        let user = credentials
            .validate(role, email.trim(), password)
            .ok_or(AppError::InvalidCredentials)?;

        *self = Session::Authenticated {
            user,
            view: View::Bookings,
        };
        self.user()
    }

    /// Switch the main view. The Spaces view is admin-only.
    pub fn show(&mut self, target: View) -> AppResult<&User> {
        match self {
            Session::Authenticated { user, view } => {
                if !target.allowed_for(user.role) {
                    return Err(AppError::PermissionDenied(
                        "the spaces view is available to administrators only".into(),
                    ));
                }
                *view = target;
                Ok(user)
            }
            _ => Err(AppError::NotAuthenticated("log in first".into())),
        }
    }

    pub fn logout(&mut self) {
        *self = Session::Unauthenticated;
    }

    pub fn user(&self) -> AppResult<&User> {
        match self {
            Session::Authenticated { user, .. } => Ok(user),
            _ => Err(AppError::NotAuthenticated("log in first".into())),
        }
    }

    pub fn view(&self) -> Option<View> {
        match self {
            Session::Authenticated { view, .. } => Some(*view),
            _ => None,
        }
    }

    /// The logged-in user, provided they are an administrator.
    pub fn require_admin(&self) -> AppResult<&User> {
        let user = self.user()?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(AppError::PermissionDenied(
                "this command is available to administrators only".into(),
            ))
        }
    }
}
