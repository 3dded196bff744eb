//! Error types for NAITE.

use thiserror::Error;

use crate::auth::PasswordError;

/// Common error type for NAITE.
#[derive(Error, Debug)]
pub enum NaiteError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant. They are
    /// infrastructure failures, never domain outcomes.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Referenced board, review or user does not exist.
    ///
    /// The payload names the entity and its key, e.g. `"board 101"`.
    #[error("{0} not found")]
    NotFound(String),

    /// The caller does not own the resource it tried to mutate.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Sign-up against an email or login id that already has an account.
    #[error("account already exists")]
    DuplicateAccount,

    /// Unknown login id or wrong password.
    #[error("invalid login id or password")]
    InvalidCredentials,

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Password hashing or policy error.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl NaiteError {
    /// Shorthand for a `NotFound` naming an entity and its key.
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        NaiteError::NotFound(format!("{entity} {key}"))
    }
}

impl From<sqlx::Error> for NaiteError {
    fn from(e: sqlx::Error) -> Self {
        NaiteError::Database(e.to_string())
    }
}

/// Result type alias for NAITE operations.
pub type Result<T> = std::result::Result<T, NaiteError>;
