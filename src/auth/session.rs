//! Session persistence

use std::sync::Arc;

use crate::auth::models::{Role, Session};
use crate::error::{Error, Result};
use crate::storage::Storage;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USERNAME_KEY: &str = "username";

/// Persists the current session under the `token`, `role` and `username` keys
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Rebuild the stored session, or `None` when any key is missing, empty or invalid
    pub fn restore(&self) -> Option<Session> {
        match self.read() {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::debug!("No session restored: {}", e);
                None
            }
        }
    }

    fn read(&self) -> Result<Session> {
        let token = self.required(TOKEN_KEY)?;
        let role: Role = self.required(ROLE_KEY)?.parse()?;
        let username = self.required(USERNAME_KEY)?;
        Ok(Session::new(token, username, role))
    }

    fn required(&self, key: &str) -> Result<String> {
        self.storage
            .get(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::Restoration(format!("'{}' missing", key)))
    }

    /// Write all three keys at once
    pub fn save(&self, session: &Session) -> Result<()> {
        self.storage.set_many(&[
            (TOKEN_KEY, session.token.as_str()),
            (ROLE_KEY, session.role.as_str()),
            (USERNAME_KEY, session.username.as_str()),
        ])
    }

    /// Remove all three keys at once
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_many(&[TOKEN_KEY, ROLE_KEY, USERNAME_KEY])
    }
}
