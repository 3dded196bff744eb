//! Review service for NAITE.
//!
//! A review spans two rows (the review and its board). Creation and update
//! write both inside one transaction so a failure leaves neither changed.

use tracing::info;

use crate::board::BoardRepository;
use crate::db::Database;
use crate::{NaiteError, Result};

use super::repository::ReviewRepository;
use super::types::{ReviewSaveRequest, ReviewUpdate, ReviewView};

/// Service for review operations.
pub struct ReviewService<'a> {
    db: &'a Database,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all reviews whose board is live.
    pub async fn list_all(&self) -> Result<Vec<ReviewView>> {
        self.list(None).await
    }

    /// List live reviews in a small category.
    pub async fn list_by_category(&self, small_category_no: i32) -> Result<Vec<ReviewView>> {
        self.list(Some(small_category_no)).await
    }

    async fn list(&self, small_category_no: Option<i32>) -> Result<Vec<ReviewView>> {
        let mut conn = self.db.acquire().await?;
        let rows = ReviewRepository::new(&mut conn)
            .list_live(small_category_no)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(review, board)| ReviewView::new(review, board))
            .collect())
    }

    /// Get a review with its board.
    pub async fn get_by_id(&self, review_id: i64) -> Result<ReviewView> {
        let mut conn = self.db.acquire().await?;
        let (review, board) = ReviewRepository::new(&mut conn)
            .get_with_board(review_id)
            .await?
            .ok_or_else(|| NaiteError::not_found("review", review_id))?;

        Ok(ReviewView::new(review, board))
    }

    /// Create a review and its board.
    ///
    /// Returns the new review's ID.
    pub async fn create(&self, request: &ReviewSaveRequest) -> Result<i64> {
        let mut tx = self.db.begin_write().await?;

        let board_id = BoardRepository::new(&mut *tx)
            .create(request.owner_id, &request.board)
            .await?;
        let review_id = ReviewRepository::new(&mut *tx)
            .create(board_id, request.review_star, request.small_category_no)
            .await?;

        tx.commit().await?;
        info!(review_id, board_id, user_id = request.owner_id, "review created");
        Ok(review_id)
    }

    /// Update a review and its board together.
    ///
    /// Fails with `NotFound` if the review or the board named by
    /// `update.board_no` is absent, with `Validation` if that board is not
    /// the review's own board, and with `Forbidden` if `caller_id` does not
    /// own it. Nothing is written unless every check passes.
    pub async fn update(&self, review_id: i64, update: &ReviewUpdate, caller_id: i64) -> Result<i64> {
        let mut tx = self.db.begin_write().await?;

        let review = ReviewRepository::new(&mut *tx)
            .get_by_id(review_id)
            .await?
            .ok_or_else(|| NaiteError::not_found("review", review_id))?;

        let mut boards = BoardRepository::new(&mut *tx);
        let board = boards
            .get_by_id(update.board_no)
            .await?
            .ok_or_else(|| NaiteError::not_found("board", update.board_no))?;
        if board.id != review.board_id {
            return Err(NaiteError::Validation(format!(
                "board {} does not belong to review {review_id}",
                board.id
            )));
        }
        if board.user_id != caller_id {
            return Err(NaiteError::Forbidden(format!(
                "review {review_id} is owned by another user"
            )));
        }
        boards.update_content(board.id, &update.board).await?;

        ReviewRepository::new(&mut *tx)
            .update_fields(review_id, update.review_star, update.small_category_no)
            .await?;

        tx.commit().await?;
        info!(review_id, board_id = board.id, user_id = caller_id, "review updated");
        Ok(review_id)
    }
}
