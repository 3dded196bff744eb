//! Board model for NAITE.
//!
//! Boards are community posts (listings). Owners are never exposed: views
//! carry the owner's nickname and [`REDACTED_OWNER`] in place of the id.

/// Owner id placed in every outward-facing board view.
pub const REDACTED_OWNER: i64 = 0;

/// Maximum number of boards returned by a top-liked listing.
pub const TOP_LIKED_LIMIT: i64 = 5;

/// Board entity as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    pub title: String,
    pub content: String,
    /// Picture reference (URL or storage key).
    pub pic: Option<String>,
    /// Post anonymously.
    pub unknown_flag: bool,
    /// Publicly visible.
    pub open_flag: bool,
    /// Top-level category.
    pub big_category_no: i32,
    /// Denormalized number of likes.
    pub like_count: i64,
    /// Soft-delete marker.
    pub is_deleted: bool,
    /// Creation timestamp, set on insert.
    pub created_at: String,
}

/// Data for creating a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSaveRequest {
    pub title: String,
    pub content: String,
    pub pic: Option<String>,
    pub unknown_flag: bool,
    pub open_flag: bool,
    pub big_category_no: i32,
}

impl BoardSaveRequest {
    /// Create a new request with the required fields.
    ///
    /// Defaults: no picture, not anonymous, open.
    pub fn new(title: impl Into<String>, content: impl Into<String>, big_category_no: i32) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            pic: None,
            unknown_flag: false,
            open_flag: true,
            big_category_no,
        }
    }

    /// Set the picture reference.
    pub fn with_pic(mut self, pic: impl Into<String>) -> Self {
        self.pic = Some(pic.into());
        self
    }

    /// Set the anonymous flag.
    pub fn with_unknown_flag(mut self, unknown_flag: bool) -> Self {
        self.unknown_flag = unknown_flag;
        self
    }

    /// Set the visibility flag.
    pub fn with_open_flag(mut self, open_flag: bool) -> Self {
        self.open_flag = open_flag;
        self
    }
}

/// Replacement content for an existing board.
///
/// Every field is overwritten; creation time, category and like count are
/// not part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub title: String,
    pub content: String,
    pub pic: Option<String>,
    pub unknown_flag: bool,
    pub open_flag: bool,
}

impl BoardUpdate {
    /// Create an update with the given title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            pic: None,
            unknown_flag: false,
            open_flag: true,
        }
    }

    /// Set the picture reference.
    pub fn with_pic(mut self, pic: impl Into<String>) -> Self {
        self.pic = Some(pic.into());
        self
    }

    /// Set the anonymous flag.
    pub fn with_unknown_flag(mut self, unknown_flag: bool) -> Self {
        self.unknown_flag = unknown_flag;
        self
    }

    /// Set the visibility flag.
    pub fn with_open_flag(mut self, open_flag: bool) -> Self {
        self.open_flag = open_flag;
        self
    }
}

/// Identifies the board a like or unlike targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeRequest {
    pub board_no: i64,
}

impl LikeRequest {
    pub fn new(board_no: i64) -> Self {
        Self { board_no }
    }
}

/// Sort order for board listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardOrder {
    /// Most recent first.
    #[default]
    Newest,
    /// Highest like count first; ties keep insertion order.
    MostLiked,
}

/// Filter for board listings.
///
/// Every listing only returns live boards. Filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct BoardQuery {
    pub big_category_no: Option<i32>,
    pub user_id: Option<i64>,
    /// Case-sensitive substring of the title.
    pub title_contains: Option<String>,
    /// Only boards this user has liked.
    pub liked_by: Option<i64>,
    pub order: BoardOrder,
    pub limit: Option<i64>,
}

impl BoardQuery {
    /// All live boards, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, big_category_no: i32) -> Self {
        self.big_category_no = Some(big_category_no);
        self
    }

    pub fn owner(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn title_contains(mut self, text: impl Into<String>) -> Self {
        self.title_contains = Some(text.into());
        self
    }

    pub fn liked_by(mut self, user_id: i64) -> Self {
        self.liked_by = Some(user_id);
        self
    }

    pub fn order(mut self, order: BoardOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Board as returned to callers.
///
/// `user_no` is always [`REDACTED_OWNER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub board_no: i64,
    pub user_no: i64,
    /// Owner's nickname.
    pub user_nick: String,
    pub title: String,
    pub content: String,
    pub pic: Option<String>,
    pub unknown_flag: bool,
    pub open_flag: bool,
    pub big_category_no: i32,
    pub like_count: i64,
    pub is_deleted: bool,
    pub created_at: String,
    /// Nicknames of users who liked the board. Only set on detail lookups.
    pub liked_by: Option<Vec<String>>,
}

impl BoardView {
    /// Build a redacted view of a board owned by `user_nick`.
    pub fn from_board(board: Board, user_nick: String) -> Self {
        Self {
            board_no: board.id,
            user_no: REDACTED_OWNER,
            user_nick,
            title: board.title,
            content: board.content,
            pic: board.pic,
            unknown_flag: board.unknown_flag,
            open_flag: board.open_flag,
            big_category_no: board.big_category_no,
            like_count: board.like_count,
            is_deleted: board.is_deleted,
            created_at: board.created_at,
            liked_by: None,
        }
    }

    /// Attach the list of liker nicknames.
    pub fn with_liked_by(mut self, liked_by: Vec<String>) -> Self {
        self.liked_by = Some(liked_by);
        self
    }
}
