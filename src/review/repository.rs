//! Review repository for NAITE.

use sqlx::{QueryBuilder, SqliteConnection};

use super::types::Review;
use crate::board::Board;
use crate::{NaiteError, Result};

const REVIEW_BOARD_COLUMNS: &str = "r.id AS review_id, r.review_star, r.small_category_no, \
     b.id, b.user_id, b.title, b.content, b.pic, b.unknown_flag, b.open_flag, \
     b.big_category_no, b.like_count, b.is_deleted, b.created_at";

/// Repository for review rows.
pub struct ReviewRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ReviewRepository<'c> {
    /// Create a new ReviewRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a review for an existing board.
    ///
    /// Returns the assigned ID.
    pub async fn create(
        &mut self,
        board_id: i64,
        review_star: i32,
        small_category_no: i32,
    ) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO reviews (board_id, review_star, small_category_no)
             VALUES (?, ?, ?) RETURNING id",
        )
        .bind(board_id)
        .bind(review_star)
        .bind(small_category_no)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(id)
    }

    /// Get a review row by ID.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Review>> {
        let result: Option<ReviewRow> = sqlx::query_as(
            "SELECT id, board_id, review_star, small_category_no FROM reviews WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.map(|row| row.into_review()))
    }

    /// Get a review together with its board.
    pub async fn get_with_board(&mut self, id: i64) -> Result<Option<(Review, Board)>> {
        let result: Option<ReviewBoardRow> = sqlx::query_as(&format!(
            "SELECT {REVIEW_BOARD_COLUMNS} FROM reviews r
             JOIN boards b ON b.id = r.board_id
             WHERE r.id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.map(|row| row.into_parts()))
    }

    /// List reviews whose board is live, ordered by review ID.
    pub async fn list_live(&mut self, small_category_no: Option<i32>) -> Result<Vec<(Review, Board)>> {
        let mut builder: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(format!(
            "SELECT {REVIEW_BOARD_COLUMNS} FROM reviews r
             JOIN boards b ON b.id = r.board_id
             WHERE b.is_deleted = 0"
        ));

        if let Some(category) = small_category_no {
            builder.push(" AND r.small_category_no = ");
            builder.push_bind(category);
        }
        builder.push(" ORDER BY r.id ASC");

        let rows: Vec<ReviewBoardRow> = builder
            .build_query_as()
            .fetch_all(&mut *self.conn)
            .await
            .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into_parts()).collect())
    }

    /// Overwrite star rating and small category.
    ///
    /// Returns false if no such review exists.
    pub async fn update_fields(
        &mut self,
        id: i64,
        review_star: i32,
        small_category_no: i32,
    ) -> Result<bool> {
        let result =
            sqlx::query("UPDATE reviews SET review_star = ?, small_category_no = ? WHERE id = ?")
                .bind(review_star)
                .bind(small_category_no)
                .bind(id)
                .execute(&mut *self.conn)
                .await
                .map_err(|e| NaiteError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    board_id: i64,
    review_star: i32,
    small_category_no: i32,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            id: self.id,
            board_id: self.board_id,
            review_star: self.review_star,
            small_category_no: self.small_category_no,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewBoardRow {
    review_id: i64,
    review_star: i32,
    small_category_no: i32,
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

impl ReviewBoardRow {
    fn into_parts(self) -> (Review, Board) {
        let review = Review {
            id: self.review_id,
            board_id: self.id,
            review_star: self.review_star,
            small_category_no: self.small_category_no,
        };
        let board = Board {
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
        };
        (review, board)
    }
}
