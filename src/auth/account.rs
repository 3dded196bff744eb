//! Account operations for NAITE.
//!
//! Sign-up, sign-in and password changes on top of the identity store and
//! a [`CredentialVerifier`].

use tracing::{info, warn};

use super::password::{CredentialVerifier, PasswordError};
use crate::db::{NewUser, User, UserRepository};
use crate::{NaiteError, Result};

/// Sign-up request data.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    /// Desired login id.
    pub login_id: String,
    /// Display nickname.
    pub nickname: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl SignUpRequest {
    /// Create a new sign-up request.
    pub fn new(
        login_id: impl Into<String>,
        nickname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login_id: login_id.into(),
            nickname: nickname.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-in request data.
#[derive(Debug, Clone)]
pub struct SignInRequest {
    pub login_id: String,
    pub password: String,
}

impl SignInRequest {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            password: password.into(),
        }
    }
}

/// Register a new account.
///
/// Fails with [`NaiteError::DuplicateAccount`] when the email or login id is
/// already taken. The check runs before hashing; a concurrent sign-up that
/// slips past it is caught by the UNIQUE constraints.
pub async fn sign_up(
    repo: &mut UserRepository<'_>,
    verifier: &dyn CredentialVerifier,
    request: &SignUpRequest,
) -> Result<User> {
    if repo.email_exists(&request.email).await?
        || repo.login_id_exists(&request.login_id).await?
    {
        return Err(NaiteError::DuplicateAccount);
    }

    let credential = verifier.hash(&request.password)?;
    let user = repo
        .create(&NewUser::new(
            &request.login_id,
            &request.nickname,
            &request.email,
            credential,
        ))
        .await?;

    info!(user_id = user.id, login_id = %user.login_id, "account created");
    Ok(user)
}

/// Authenticate with login id and password.
///
/// Unknown login ids and wrong passwords both yield
/// [`NaiteError::InvalidCredentials`].
pub async fn sign_in(
    repo: &mut UserRepository<'_>,
    verifier: &dyn CredentialVerifier,
    request: &SignInRequest,
) -> Result<User> {
    let Some(user) = repo.get_by_login_id(&request.login_id).await? else {
        warn!(login_id = %request.login_id, "sign-in for unknown login id");
        return Err(NaiteError::InvalidCredentials);
    };

    match verifier.verify(&request.password, &user.credential()) {
        Ok(()) => Ok(user),
        Err(PasswordError::VerificationFailed) => {
            warn!(user_id = user.id, "sign-in with wrong password");
            Err(NaiteError::InvalidCredentials)
        }
        Err(e) => Err(e.into()),
    }
}

/// Change a user's password after checking the current one.
pub async fn change_password(
    repo: &mut UserRepository<'_>,
    verifier: &dyn CredentialVerifier,
    user_id: i64,
    current_password: &str,
    new_password: &str,
) -> Result<()> {
    let user = repo
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| NaiteError::not_found("user", user_id))?;

    match verifier.verify(current_password, &user.credential()) {
        Ok(()) => {}
        Err(PasswordError::VerificationFailed) => return Err(NaiteError::InvalidCredentials),
        Err(e) => return Err(e.into()),
    }

    let credential = verifier.hash(new_password)?;
    repo.update_credentials(user_id, &credential).await?;

    info!(user_id, "password changed");
    Ok(())
}

/// Find an account by email address.
pub async fn find_by_email(repo: &mut UserRepository<'_>, email: &str) -> Result<User> {
    repo.get_by_email(email)
        .await?
        .ok_or_else(|| NaiteError::not_found("user", email))
}
