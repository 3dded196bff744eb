//! User model for NAITE.
//!
//! Users own boards and like them. Boards only ever expose a user's
//! nickname; the id stays on the server side.

/// User entity representing a registered account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login identifier (unique).
    pub login_id: String,
    /// Public display name.
    pub nickname: String,
    /// Email address (unique).
    pub email: String,
    /// Password hash (PHC string).
    pub password_hash: String,
    /// Salt the hash was derived with.
    pub password_salt: String,
    /// Account creation timestamp.
    pub created_at: String,
}

impl User {
    /// Stored credential pair for this user.
    pub fn credential(&self) -> Credential {
        Credential {
            hash: self.password_hash.clone(),
            salt: self.password_salt.clone(),
        }
    }
}

/// Salt and hash produced by a credential verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Derived hash.
    pub hash: String,
    /// Salt used to derive `hash`.
    pub salt: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login_id: String,
    pub nickname: String,
    pub email: String,
    /// Pre-hashed credential.
    pub credential: Credential,
}

impl NewUser {
    /// Create a new user record from already hashed credentials.
    pub fn new(
        login_id: impl Into<String>,
        nickname: impl Into<String>,
        email: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            login_id: login_id.into(),
            nickname: nickname.into(),
            email: email.into(),
            credential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let cred = Credential {
            hash: "h".to_string(),
            salt: "s".to_string(),
        };
        let user = NewUser::new("alice01", "Alice", "alice@example.com", cred.clone());
        assert_eq!(user.login_id, "alice01");
        assert_eq!(user.nickname, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.credential, cred);
    }

    #[test]
    fn test_user_credential() {
        let user = User {
            id: 1,
            login_id: "alice01".to_string(),
            nickname: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            password_salt: "salt".to_string(),
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        let cred = user.credential();
        assert_eq!(cred.hash, "$argon2id$...");
        assert_eq!(cred.salt, "salt");
    }
}
