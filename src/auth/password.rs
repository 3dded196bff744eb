//! Password hashing and validation for NAITE.
//!
//! The core only talks to [`CredentialVerifier`]. [`Argon2Verifier`] is the
//! shipped implementation and uses Argon2id.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::db::Credential;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),

    /// Password hash is invalid.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Password verification failed (wrong password).
    #[error("password verification failed")]
    VerificationFailed,
}

/// Derives and checks stored credentials.
///
/// `verify` must return `Err(PasswordError::VerificationFailed)` on a
/// mismatch, never `Ok`.
pub trait CredentialVerifier: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, plaintext: &str) -> Result<Credential, PasswordError>;

    /// Check a plaintext password against a stored credential.
    fn verify(&self, plaintext: &str, credential: &Credential) -> Result<(), PasswordError>;
}

/// Argon2id credential verifier.
#[derive(Debug, Clone)]
pub struct Argon2Verifier {
    params: Params,
}

impl Argon2Verifier {
    /// Create a verifier with the recommended parameters.
    ///
    /// - Memory cost: 64 MB (65536 KiB)
    /// - Time cost: 3 iterations
    /// - Parallelism: 4 lanes
    pub fn new() -> Self {
        Self {
            params: Params::new(65536, 3, 4, None).unwrap_or_default(),
        }
    }

    /// Create a verifier with custom cost parameters.
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| PasswordError::HashError(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn hash(&self, plaintext: &str) -> Result<Credential, PasswordError> {
        validate_password(plaintext)?;

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashError(e.to_string()))?;

        Ok(Credential {
            hash: hash.to_string(),
            salt: salt.as_str().to_string(),
        })
    }

    fn verify(&self, plaintext: &str, credential: &Credential) -> Result<(), PasswordError> {
        // The PHC string embeds its own salt and parameters.
        let parsed_hash =
            PasswordHash::new(&credential.hash).map_err(|_| PasswordError::InvalidHash)?;

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .map_err(|_| PasswordError::VerificationFailed)
    }
}

/// Validate password requirements.
///
/// # Examples
///
/// ```
/// use naite::auth::validate_password;
///
/// assert!(validate_password("short").is_err());
/// assert!(validate_password("valid_password_123").is_ok());
/// ```
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}
