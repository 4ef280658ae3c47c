//! HTTP client for the authentication endpoint

use std::time::Duration;

use crate::auth::models::{LoginRequest, LoginResponse, Session};
use crate::config::Config;
use crate::error::{Error, Result};

/// Issues `POST /auth/login`
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    login_url: String,
}

impl AuthClient {
    pub fn new(login_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            login_url: login_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.login_url(),
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Exchange credentials for a session.
    ///
    /// Every failure mode collapses into `Error::Authentication`; the
    /// underlying cause is only logged.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(&self.login_url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Login request failed: {}", e);
                Error::Authentication
            })?;

        if !response.status().is_success() {
            tracing::debug!("Login rejected with status {}", response.status());
            return Err(Error::Authentication);
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            tracing::debug!("Malformed login response: {}", e);
            Error::Authentication
        })?;

        body.into_session(username).ok_or_else(|| {
            tracing::debug!("Login response lacked a token or a known role");
            Error::Authentication
        })
    }
}
