//! Request DTOs for Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{login_id_chars, no_control_chars, not_blank};
use crate::board::{BoardSaveRequest, BoardUpdate};

fn default_true() -> bool {
    true
}

// ============================================================================
// Auth
// ============================================================================

/// Sign-up request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 4, max = 20), custom(function = "login_id_chars"))]
    pub login_id: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(
        length(min = 1, max = 20),
        custom(function = "not_blank"),
        custom(function = "no_control_chars")
    )]
    pub nickname: String,
    #[validate(email)]
    pub email: String,
}

/// Sign-in request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub login_id: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

// ============================================================================
// Boards
// ============================================================================

/// Board creation request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(
        length(min = 1, max = 100),
        custom(function = "not_blank"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[serde(default)]
    #[validate(length(max = 512))]
    pub pic: Option<String>,
    #[serde(default)]
    pub unknown_flag: bool,
    #[serde(default = "default_true")]
    pub open_flag: bool,
    #[validate(range(min = 1))]
    pub big_category_no: i32,
}

impl From<CreateBoardRequest> for BoardSaveRequest {
    fn from(req: CreateBoardRequest) -> Self {
        BoardSaveRequest {
            title: req.title,
            content: req.content,
            pic: req.pic,
            unknown_flag: req.unknown_flag,
            open_flag: req.open_flag,
            big_category_no: req.big_category_no,
        }
    }
}

/// Board update request. Every field is replaced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBoardRequest {
    #[validate(
        length(min = 1, max = 100),
        custom(function = "not_blank"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[serde(default)]
    #[validate(length(max = 512))]
    pub pic: Option<String>,
    #[serde(default)]
    pub unknown_flag: bool,
    #[serde(default = "default_true")]
    pub open_flag: bool,
}

impl From<UpdateBoardRequest> for BoardUpdate {
    fn from(req: UpdateBoardRequest) -> Self {
        BoardUpdate {
            title: req.title,
            content: req.content,
            pic: req.pic,
            unknown_flag: req.unknown_flag,
            open_flag: req.open_flag,
        }
    }
}

/// Like or unlike request.
#[derive(Debug, Deserialize, Validate)]
pub struct LikeBoardRequest {
    #[validate(range(min = 1))]
    pub board_no: i64,
}

/// Query string for title search.
#[derive(Debug, Deserialize)]
pub struct TitleSearchQuery {
    #[serde(default)]
    pub title: String,
}

// ============================================================================
// Reviews
// ============================================================================

/// Review creation request. The board is created alongside the review.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(nested)]
    pub board: CreateBoardRequest,
    #[validate(range(min = 1, max = 5))]
    pub review_star: i32,
    #[validate(range(min = 1))]
    pub small_category_no: i32,
}

/// Review update request.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5))]
    pub review_star: i32,
    #[validate(range(min = 1))]
    pub small_category_no: i32,
    /// Board to update; must be the review's own board.
    #[validate(range(min = 1))]
    pub board_no: i64,
    #[validate(nested)]
    pub board: UpdateBoardRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn board_json() -> serde_json::Value {
        json!({ "title": "Bike", "content": "Good condition", "big_category_no": 1 })
    }

    #[test]
    fn test_create_board_defaults() {
        let req: CreateBoardRequest = serde_json::from_value(board_json()).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.pic.is_none());
        assert!(!req.unknown_flag);
        assert!(req.open_flag);

        let save: BoardSaveRequest = req.into();
        assert_eq!(save.title, "Bike");
        assert_eq!(save.big_category_no, 1);
    }

    #[test]
    fn test_create_board_rejects_blank_title() {
        let req: CreateBoardRequest = serde_json::from_value(
            json!({ "title": "   ", "content": "c", "big_category_no": 1 }),
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_board_rejects_long_title() {
        let req: CreateBoardRequest = serde_json::from_value(
            json!({ "title": "a".repeat(101), "content": "c", "big_category_no": 1 }),
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_board_rejects_bad_category() {
        let req: CreateBoardRequest = serde_json::from_value(
            json!({ "title": "t", "content": "c", "big_category_no": 0 }),
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("big_category_no"));
    }

    #[test]
    fn test_review_star_bounds() {
        for (star, ok) in [(0, false), (1, true), (5, true), (6, false)] {
            let req: CreateReviewRequest = serde_json::from_value(json!({
                "board": board_json(),
                "review_star": star,
                "small_category_no": 3
            }))
            .unwrap();
            assert_eq!(req.validate().is_ok(), ok, "star {star}");
        }
    }

    #[test]
    fn test_review_nested_board_is_validated() {
        let req: CreateReviewRequest = serde_json::from_value(json!({
            "board": { "title": "", "content": "c", "big_category_no": 1 },
            "review_star": 3,
            "small_category_no": 3
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let ok: RegisterRequest = serde_json::from_value(json!({
            "login_id": "alice01",
            "password": "password123",
            "nickname": "Alice",
            "email": "alice@example.com"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad: RegisterRequest = serde_json::from_value(json!({
            "login_id": "al",
            "password": "short",
            "nickname": "",
            "email": "not-an-email"
        }))
        .unwrap();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("login_id"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("nickname"));
        assert!(fields.contains_key("email"));
    }
}
