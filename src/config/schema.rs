//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub routes: RouteConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/auth/login` path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where client-side state is kept between invocations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Durable key/value file holding the session keys
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,

    /// Working copy of the catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
}

fn default_session_path() -> PathBuf {
    PathBuf::from("./.luminalib/session.json")
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./.luminalib/catalog.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
            catalog_path: default_catalog_path(),
        }
    }
}

/// Route surface the access guard redirects to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteConfig {
    #[serde(default = "default_login_route")]
    pub login: String,

    /// Default authenticated landing route, also the target of role mismatches
    #[serde(default = "default_landing_route")]
    pub landing: String,

    /// Where administrators land when they reach the login page while signed in
    #[serde(default = "default_admin_landing_route")]
    pub admin_landing: String,
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_landing_route() -> String {
    "/dashboard".to_string()
}

fn default_admin_landing_route() -> String {
    "/admin".to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: default_login_route(),
            landing: default_landing_route(),
            admin_landing: default_admin_landing_route(),
        }
    }
}

impl Config {
    /// Full URL of the login endpoint
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.api.base_url.trim_end_matches('/'))
    }
}
