//! Authentication module for NAITE.
//!
//! This module provides the credential verifier abstraction, its Argon2id
//! implementation, and account operations (sign-up, sign-in, password
//! change).

mod account;
mod password;

pub use account::{
    change_password, find_by_email, sign_in, sign_up, SignInRequest, SignUpRequest,
};
pub use password::{
    validate_password, Argon2Verifier, CredentialVerifier, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
