//! Review model for NAITE.
//!
//! A review is a board with a star rating and a small category. The review
//! row references its board; the two are created and updated together.

use crate::board::{Board, BoardSaveRequest, BoardUpdate};

/// Lowest allowed star rating.
pub const MIN_REVIEW_STAR: i32 = 1;

/// Highest allowed star rating.
pub const MAX_REVIEW_STAR: i32 = 5;

/// Review entity as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    /// The board this review extends.
    pub board_id: i64,
    pub review_star: i32,
    pub small_category_no: i32,
}

/// Data for creating a review together with its board.
#[derive(Debug, Clone)]
pub struct ReviewSaveRequest {
    /// Content of the review's board.
    pub board: BoardSaveRequest,
    /// Owner of the new board.
    pub owner_id: i64,
    pub review_star: i32,
    pub small_category_no: i32,
}

impl ReviewSaveRequest {
    pub fn new(
        board: BoardSaveRequest,
        owner_id: i64,
        review_star: i32,
        small_category_no: i32,
    ) -> Self {
        Self {
            board,
            owner_id,
            review_star,
            small_category_no,
        }
    }
}

/// Replacement data for a review and its board.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub review_star: i32,
    pub small_category_no: i32,
    /// The board the payload targets. Must be the review's own board.
    pub board_no: i64,
    pub board: BoardUpdate,
}

impl ReviewUpdate {
    pub fn new(review_star: i32, small_category_no: i32, board_no: i64, board: BoardUpdate) -> Self {
        Self {
            review_star,
            small_category_no,
            board_no,
            board,
        }
    }
}

/// Public board fields embedded in a review view. Carries no owner id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewBoard {
    pub board_no: i64,
    pub title: String,
    pub content: String,
    pub pic: Option<String>,
    pub unknown_flag: bool,
    pub open_flag: bool,
    pub big_category_no: i32,
    pub like_count: i64,
    pub is_deleted: bool,
    pub created_at: String,
}

impl From<Board> for ReviewBoard {
    fn from(board: Board) -> Self {
        Self {
            board_no: board.id,
            title: board.title,
            content: board.content,
            pic: board.pic,
            unknown_flag: board.unknown_flag,
            open_flag: board.open_flag,
            big_category_no: board.big_category_no,
            like_count: board.like_count,
            is_deleted: board.is_deleted,
            created_at: board.created_at,
        }
    }
}

/// Review as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub review_no: i64,
    pub review_star: i32,
    pub small_category_no: i32,
    pub board: ReviewBoard,
}

impl ReviewView {
    pub fn new(review: Review, board: Board) -> Self {
        Self {
            review_no: review.id,
            review_star: review.review_star,
            small_category_no: review.small_category_no,
            board: board.into(),
        }
    }
}
