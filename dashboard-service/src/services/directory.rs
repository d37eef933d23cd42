//! User lookup for the sign-in screen.
//!
//! There is no credential check: any non-empty password is accepted for a
//! known email. The resulting `Session` only tells the presentation layer
//! which role and client record to show.

use service_core::error::AppError;
use tracing::{info, warn};

use crate::models::{ClientId, User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    /// Client record bound to the session; `None` for admins.
    pub fn client_id(&self) -> Option<&ClientId> {
        self.user.client_id.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        match self.find_by_email(email) {
            Some(user) if !password.is_empty() => {
                info!(user_id = %user.id, role = user.role.as_str(), "User signed in");
                Ok(Session { user: user.clone() })
            }
            _ => {
                warn!("Sign-in refused");
                Err(AppError::Unauthorized(anyhow::anyhow!(
                    "Invalid email or password."
                )))
            }
        }
    }
}
