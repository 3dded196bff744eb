//! Board repository for NAITE.
//!
//! This module provides CRUD operations and filtered listings for boards.

use sqlx::{QueryBuilder, SqliteConnection};

use super::types::{Board, BoardOrder, BoardQuery, BoardSaveRequest, BoardUpdate};
use crate::{NaiteError, Result};

const BOARD_COLUMNS: &str = "b.id, b.user_id, b.title, b.content, b.pic, b.unknown_flag, \
     b.open_flag, b.big_category_no, b.like_count, b.is_deleted, b.created_at";

/// Repository for board rows.
pub struct BoardRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> BoardRepository<'c> {
    /// Create a new BoardRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a new board owned by `owner_id`.
    ///
    /// Returns the assigned ID.
    pub async fn create(&mut self, owner_id: i64, request: &BoardSaveRequest) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (user_id, title, content, pic, unknown_flag, open_flag, big_category_no)
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(owner_id)
        .bind(&request.title)
        .bind(&request.content)
        .bind(&request.pic)
        .bind(request.unknown_flag)
        .bind(request.open_flag)
        .bind(request.big_category_no)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(id)
    }

    /// Get a board by ID, deleted or not.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Board>> {
        let result: Option<BoardRow> = sqlx::query_as(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards b WHERE b.id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.map(|row| row.into_board()))
    }

    /// List live boards matching the query.
    pub async fn list(&mut self, query: &BoardQuery) -> Result<Vec<Board>> {
        let mut builder: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new(format!("SELECT {BOARD_COLUMNS} FROM boards b"));

        if let Some(user_id) = query.liked_by {
            builder.push(" JOIN board_likes l ON l.board_id = b.id AND l.user_id = ");
            builder.push_bind(user_id);
        }

        builder.push(" WHERE b.is_deleted = 0");

        if let Some(category) = query.big_category_no {
            builder.push(" AND b.big_category_no = ");
            builder.push_bind(category);
        }
        if let Some(user_id) = query.user_id {
            builder.push(" AND b.user_id = ");
            builder.push_bind(user_id);
        }
        if let Some(ref text) = query.title_contains {
            // instr() is case-sensitive, unlike LIKE.
            builder.push(" AND instr(b.title, ");
            builder.push_bind(text.clone());
            builder.push(") > 0");
        }

        match query.order {
            BoardOrder::Newest => builder.push(" ORDER BY b.created_at DESC, b.id DESC"),
            BoardOrder::MostLiked => builder.push(" ORDER BY b.like_count DESC, b.id ASC"),
        };

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        }

        let rows: Vec<BoardRow> = builder
            .build_query_as()
            .fetch_all(&mut *self.conn)
            .await
            .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into_board()).collect())
    }

    /// Overwrite the editable content of a board.
    ///
    /// Returns false if the board does not exist.
    pub async fn update_content(&mut self, id: i64, update: &BoardUpdate) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE boards
             SET title = ?, content = ?, pic = ?, unknown_flag = ?, open_flag = ?
             WHERE id = ?",
        )
        .bind(&update.title)
        .bind(&update.content)
        .bind(&update.pic)
        .bind(update.unknown_flag)
        .bind(update.open_flag)
        .bind(id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Set or clear the soft-delete marker.
    pub async fn set_deleted(&mut self, id: i64, is_deleted: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE boards SET is_deleted = ? WHERE id = ?")
            .bind(is_deleted)
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Add `delta` to the like counter in a single statement.
    ///
    /// The counter never drops below zero.
    pub async fn adjust_like_count(&mut self, id: i64, delta: i64) -> Result<bool> {
        let result =
            sqlx::query("UPDATE boards SET like_count = MAX(like_count + ?, 0) WHERE id = ?")
                .bind(delta)
                .bind(id)
                .execute(&mut *self.conn)
                .await
                .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal struct for mapping database rows to Board.
#[derive(sqlx::FromRow)]
struct BoardRow {
    id: i64,
    user_id: i64,
    title: String,
    content: String,
    pic: Option<String>,
    unknown_flag: bool,
    open_flag: bool,
    big_category_no: i32,
    like_count: i64,
    is_deleted: bool,
    created_at: String,
}

impl BoardRow {
    fn into_board(self) -> Board {
        Board {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            pic: self.pic,
            unknown_flag: self.unknown_flag,
            open_flag: self.open_flag,
            big_category_no: self.big_category_no,
            like_count: self.like_count,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
        }
    }
}
