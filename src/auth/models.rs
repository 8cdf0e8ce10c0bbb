//! Authentication models

use serde::{Deserialize, Serialize};
use std::fmt;

/// User roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Client - browses and hires workers
    User,
    /// Worker - offers services on the marketplace
    Worker,
    /// Administrator - manages workers and admins
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Worker => write!(f, "worker"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// An authenticated session.
///
/// Either a session exists with every field populated, or there is no
/// session at all. A token without a role is never representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token sent with each authenticated request
    pub token: String,
    /// Role granted by the server at login
    pub role: Role,
    /// Username the session was opened for
    pub username: String,
    /// When the session was opened
    pub logged_in_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// Create a new session
    pub fn new(username: String, token: String, role: Role) -> Self {
        Self {
            token,
            role,
            username,
            logged_in_at: chrono::Utc::now(),
        }
    }
}

/// Login credentials. Transient: held only until submitted, never persisted
/// and never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
