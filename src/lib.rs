//! LuminaLib - library catalog client
//!
//! This is the library interface for LuminaLib: session persistence, the
//! authentication service, the role-aware access guard and navigation menu,
//! and the book catalog the pages operate on.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod routing;
pub mod storage;

pub use app::{App, Outcome};
pub use auth::{AuthService, AuthState, Role, Session};
pub use config::Config;
pub use error::Error;
pub use routing::{decide, menu_for, AccessGuard, Decision};
