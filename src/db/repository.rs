//! User repository for NAITE.
//!
//! The identity store. Every method runs on the borrowed connection, so a
//! repository built over `&mut *tx` takes part in that transaction.

use std::collections::HashMap;

use sqlx::{QueryBuilder, SqliteConnection};

use super::user::{Credential, NewUser, User};
use crate::{NaiteError, Result};

const USER_COLUMNS: &str =
    "id, login_id, nickname, email, password_hash, password_salt, created_at";

/// Ids bound per statement when looking up nicknames.
const NICKNAME_BATCH_SIZE: usize = 500;

/// Repository for user accounts.
pub struct UserRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> UserRepository<'c> {
    /// Create a new UserRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a new user in the database.
    ///
    /// A UNIQUE violation on login id or email is reported as
    /// [`NaiteError::DuplicateAccount`].
    pub async fn create(&mut self, new_user: &NewUser) -> Result<User> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (login_id, nickname, email, password_hash, password_salt)
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_user.login_id)
        .bind(&new_user.nickname)
        .bind(&new_user.email)
        .bind(&new_user.credential.hash)
        .bind(&new_user.credential.salt)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                NaiteError::DuplicateAccount
            }
            e => NaiteError::Database(e.to_string()),
        })?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| NaiteError::not_found("user", id))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(user)
    }

    /// Get a user by email address.
    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(user)
    }

    /// Get a user by login id.
    pub async fn get_by_login_id(&mut self, login_id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE login_id = ?"
        ))
        .bind(login_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(user)
    }

    /// Get only the nickname of a user.
    pub async fn nickname_of(&mut self, id: i64) -> Result<Option<String>> {
        let nickname: Option<String> =
            sqlx::query_scalar("SELECT nickname FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *self.conn)
                .await
                .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(nickname)
    }

    /// Look up nicknames for a set of user ids.
    ///
    /// Ids are bound in batches of `NICKNAME_BATCH_SIZE` so the statement
    /// stays under SQLite's bound parameter limit. Ids with no matching row
    /// are absent from the returned map.
    pub async fn nicknames(&mut self, ids: &[i64]) -> Result<HashMap<i64, String>> {
        let mut nicknames = HashMap::with_capacity(ids.len());

        for chunk in ids.chunks(NICKNAME_BATCH_SIZE) {
            let mut query: QueryBuilder<sqlx::Sqlite> =
                QueryBuilder::new("SELECT id, nickname FROM users WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let rows: Vec<(i64, String)> = query
                .build_query_as()
                .fetch_all(&mut *self.conn)
                .await
                .map_err(|e| NaiteError::Database(e.to_string()))?;
            nicknames.extend(rows);
        }

        Ok(nicknames)
    }

    /// Replace the stored credential of a user.
    ///
    /// Returns false if no such user exists.
    pub async fn update_credentials(&mut self, id: i64, credential: &Credential) -> Result<bool> {
        let result =
            sqlx::query("UPDATE users SET password_hash = ?, password_salt = ? WHERE id = ?")
                .bind(&credential.hash)
                .bind(&credential.salt)
                .bind(id)
                .execute(&mut *self.conn)
                .await
                .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether an email address already has an account.
    pub async fn email_exists(&mut self, email: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(&mut *self.conn)
            .await
            .map_err(|e| NaiteError::Database(e.to_string()))?;
        Ok(exists)
    }

    /// Check whether a login id is already taken.
    pub async fn login_id_exists(&mut self, login_id: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE login_id = ?)")
                .bind(login_id)
                .fetch_one(&mut *self.conn)
                .await
                .map_err(|e| NaiteError::Database(e.to_string()))?;
        Ok(exists)
    }
}
