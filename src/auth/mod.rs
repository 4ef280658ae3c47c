//! Authentication and session management

pub mod client;
pub mod models;
pub mod service;
pub mod session;

pub use client::AuthClient;
pub use models::{AuthState, LoginRequest, LoginResponse, Role, Session};
pub use service::{AuthService, SubscriptionId};
pub use session::SessionStore;
