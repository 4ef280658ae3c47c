//! Authentication models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Permission tier attached to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administrator - manages the catalog and views users
    #[serde(alias = "ROLE_ADMIN", alias = "admin")]
    Admin,
    /// Member - browses and borrows books
    #[serde(alias = "ROLE_USER", alias = "member", alias = "user")]
    Member,
}

impl Role {
    /// Canonical string written to durable storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }

    /// Human label shown next to the username
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" | "ROLE_ADMIN" | "admin" => Ok(Role::Admin),
            "Member" | "ROLE_USER" | "member" | "user" => Ok(Role::Member),
            other => Err(Error::Restoration(format!("unknown role '{}'", other))),
        }
    }
}

/// The authenticated identity held by the client.
///
/// Either the whole session exists or none of it does; absence is `None`
/// wherever a session is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Snapshot of the client's authentication state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True only until the stored session has been restored at startup
    pub is_loading: bool,
}

impl AuthState {
    /// State before restoration has run
    pub fn loading() -> Self {
        Self {
            session: None,
            is_loading: true,
        }
    }

    /// Restored or updated state
    pub fn ready(session: Option<Session>) -> Self {
        Self {
            session,
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}

/// Login credentials
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of a successful login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginResponse {
    /// Turn the response into a session, falling back to the submitted username
    /// when the server leaves it out or sends it empty
    pub fn into_session(self, submitted_username: &str) -> Option<Session> {
        if self.token.is_empty() {
            return None;
        }
        let role = self.role.parse().ok()?;
        let username = self
            .username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| submitted_username.to_string());
        Some(Session::new(self.token, username, role))
    }
}
