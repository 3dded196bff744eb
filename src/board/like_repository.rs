//! Like repository for NAITE.
//!
//! A like is the pair (user, board). The composite primary key keeps at
//! most one row per pair.

use sqlx::SqliteConnection;

use crate::{NaiteError, Result};

/// Repository for the like relation.
pub struct LikeRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> LikeRepository<'c> {
    /// Create a new LikeRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Record that `user_id` likes `board_id`.
    ///
    /// Returns true if a new row was inserted, false if the like already
    /// existed.
    pub async fn insert(&mut self, user_id: i64, board_id: i64) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO board_likes (user_id, board_id) VALUES (?, ?)
             ON CONFLICT(user_id, board_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(board_id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    /// Remove a like.
    ///
    /// Returns true if a row was deleted.
    pub async fn delete(&mut self, user_id: i64, board_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM board_likes WHERE user_id = ? AND board_id = ?")
            .bind(user_id)
            .bind(board_id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Nicknames of the users who like a board, in the order they liked it.
    pub async fn liker_nicknames(&mut self, board_id: i64) -> Result<Vec<String>> {
        let nicknames: Vec<String> = sqlx::query_scalar(
            "SELECT u.nickname FROM board_likes l
             JOIN users u ON u.id = l.user_id
             WHERE l.board_id = ?
             ORDER BY l.rowid ASC",
        )
        .bind(board_id)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(nicknames)
    }
}
