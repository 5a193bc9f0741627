use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::auth::password::PasswordPolicy;

/// An authenticated identity. Admins and users live in separate tables;
/// emails are unique per table, not globally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2-encoded hash. Never leaves the process in a response body.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
}

/// The two principal kinds. The kind selects the backing table, the fixed
/// role tag and the password policy applied at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    Admin,
    User,
}

impl PrincipalKind {
    pub fn table(self) -> &'static str {
        match self {
            PrincipalKind::Admin => "admins",
            PrincipalKind::User => "users",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            PrincipalKind::Admin => "admin",
            PrincipalKind::User => "user",
        }
    }

    /// Capitalized form used in registration success messages.
    pub fn label(self) -> &'static str {
        match self {
            PrincipalKind::Admin => "Admin",
            PrincipalKind::User => "User",
        }
    }

    pub fn password_policy(self) -> PasswordPolicy {
        match self {
            PrincipalKind::Admin => PasswordPolicy::Basic,
            PrincipalKind::User => PasswordPolicy::Strong,
        }
    }
}
