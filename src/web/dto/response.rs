//! Response DTOs for Web API.

use serde::Serialize;

use crate::board::BoardView;
use crate::db::User;
use crate::review::{ReviewBoard, ReviewView};

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response carrying the id of a created or modified entity.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}

// ============================================================================
// Auth DTOs
// ============================================================================

/// Sign-in response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Access token (JWT).
    pub access_token: String,
    /// Always "Bearer".
    pub token_type: &'static str,
    /// Access token expiry in seconds.
    pub expires_in: u64,
    /// User information.
    pub user: UserInfo,
}

/// User information in responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub login_id: String,
    pub nickname: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            login_id: user.login_id.clone(),
            nickname: user.nickname.clone(),
        }
    }
}

/// Current user response (for /api/auth/me).
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub login_id: String,
    pub nickname: String,
    pub email: String,
    /// Account creation timestamp.
    pub created_at: String,
}

impl From<User> for MeResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login_id: user.login_id,
            nickname: user.nickname,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Board DTOs
// ============================================================================

/// Board as seen by readers.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board_no: i64,
    /// Always 0; owner ids are not exposed.
    pub user_no: i64,
    pub user_nick: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic: Option<String>,
    pub unknown_flag: bool,
    pub open_flag: bool,
    pub big_category_no: i32,
    pub like_count: i64,
    pub is_deleted: bool,
    pub created_at: String,
    /// Liker nicknames, present on detail views only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<String>>,
}

impl From<BoardView> for BoardResponse {
    fn from(view: BoardView) -> Self {
        Self {
            board_no: view.board_no,
            user_no: view.user_no,
            user_nick: view.user_nick,
            title: view.title,
            content: view.content,
            pic: view.pic,
            unknown_flag: view.unknown_flag,
            open_flag: view.open_flag,
            big_category_no: view.big_category_no,
            like_count: view.like_count,
            is_deleted: view.is_deleted,
            created_at: view.created_at,
            liked_by: view.liked_by,
        }
    }
}

// ============================================================================
// Review DTOs
// ============================================================================

/// Board embedded in a review. The owner is never exposed.
#[derive(Debug, Serialize)]
pub struct ReviewBoardResponse {
    pub board_no: i64,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic: Option<String>,
    pub unknown_flag: bool,
    pub open_flag: bool,
    pub big_category_no: i32,
    pub like_count: i64,
    pub created_at: String,
}

impl From<ReviewBoard> for ReviewBoardResponse {
    fn from(board: ReviewBoard) -> Self {
        Self {
            board_no: board.board_no,
            title: board.title,
            content: board.content,
            pic: board.pic,
            unknown_flag: board.unknown_flag,
            open_flag: board.open_flag,
            big_category_no: board.big_category_no,
            like_count: board.like_count,
            created_at: board.created_at,
        }
    }
}

/// Review with its board.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review_no: i64,
    pub review_star: i32,
    pub small_category_no: i32,
    pub board: ReviewBoardResponse,
}

impl From<ReviewView> for ReviewResponse {
    fn from(view: ReviewView) -> Self {
        Self {
            review_no: view.review_no,
            review_star: view.review_star,
            small_category_no: view.small_category_no,
            board: view.board.into(),
        }
    }
}
