//! Error types for LuminaLib

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credentials rejected or the login request failed. Carries no detail on purpose.
    #[error("Invalid username or password")]
    Authentication,

    #[error("A login request is already in progress")]
    LoginInProgress,

    /// Stored session data is missing or unusable. Never shown to the user.
    #[error("Stored session could not be restored: {0}")]
    Restoration(String),

    #[error("Book {0} not found")]
    BookNotFound(u64),

    #[error("Book {0} is not available")]
    BookUnavailable(u64),

    #[error("Invalid book: {0}")]
    InvalidBook(String),

    #[error("Config file not found. Run 'luminalib init' first.")]
    ConfigNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
