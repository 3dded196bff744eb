//! Board service for NAITE.
//!
//! This module provides the high-level board operations: listings enriched
//! with owner nicknames, owner-checked mutations, and the like protocol.
//! Each operation runs in a single transaction.

use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::db::{Database, UserRepository};
use crate::{NaiteError, Result};

use super::like_repository::LikeRepository;
use super::repository::BoardRepository;
use super::types::{
    Board, BoardOrder, BoardQuery, BoardSaveRequest, BoardUpdate, BoardView, LikeRequest,
    TOP_LIKED_LIMIT,
};

/// Service for board operations with ownership checking.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all live boards, newest first.
    pub async fn list_all(&self) -> Result<Vec<BoardView>> {
        self.list(&BoardQuery::new()).await
    }

    /// List live boards in a category, newest first.
    pub async fn list_by_category(&self, big_category_no: i32) -> Result<Vec<BoardView>> {
        self.list(&BoardQuery::new().category(big_category_no)).await
    }

    /// List the most liked live boards in a category.
    ///
    /// At most [`TOP_LIKED_LIMIT`] boards are returned. Equal like counts
    /// keep insertion order.
    pub async fn list_top_liked(&self, big_category_no: i32) -> Result<Vec<BoardView>> {
        self.list(
            &BoardQuery::new()
                .category(big_category_no)
                .order(BoardOrder::MostLiked)
                .limit(TOP_LIKED_LIMIT),
        )
        .await
    }

    /// List live boards owned by a user, newest first.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<BoardView>> {
        self.list(&BoardQuery::new().owner(user_id)).await
    }

    /// List live boards whose title contains `text`, newest first.
    pub async fn list_by_title(&self, text: &str) -> Result<Vec<BoardView>> {
        self.list(&BoardQuery::new().title_contains(text)).await
    }

    /// List live boards the user has liked, newest first.
    pub async fn list_liked_by_user(&self, user_id: i64) -> Result<Vec<BoardView>> {
        self.list(&BoardQuery::new().liked_by(user_id)).await
    }

    /// Run a listing query and enrich the result, all in one snapshot.
    pub async fn list(&self, query: &BoardQuery) -> Result<Vec<BoardView>> {
        let mut tx = self.db.begin().await?;
        let boards = BoardRepository::new(&mut *tx).list(query).await?;
        let views = enrich(&mut *tx, boards).await?;
        tx.commit().await?;
        Ok(views)
    }

    /// Get the detail view of a board, including the nicknames of its
    /// likers.
    ///
    /// Deleted boards are returned as well.
    pub async fn get_by_id(&self, board_id: i64) -> Result<BoardView> {
        let mut tx = self.db.begin().await?;

        let board = BoardRepository::new(&mut *tx)
            .get_by_id(board_id)
            .await?
            .ok_or_else(|| NaiteError::not_found("board", board_id))?;
        let user_nick = owner_nickname(&mut *tx, board.user_id).await?;
        let liked_by = LikeRepository::new(&mut *tx).liker_nicknames(board_id).await?;

        tx.commit().await?;
        Ok(BoardView::from_board(board, user_nick).with_liked_by(liked_by))
    }

    /// Create a new board owned by `owner_id`.
    ///
    /// Returns the new board's ID.
    pub async fn create(&self, request: &BoardSaveRequest, owner_id: i64) -> Result<i64> {
        let mut tx = self.db.begin_write().await?;
        let id = BoardRepository::new(&mut *tx).create(owner_id, request).await?;
        tx.commit().await?;

        info!(board_id = id, user_id = owner_id, "board created");
        Ok(id)
    }

    /// Overwrite title, content, picture and flags of a board.
    ///
    /// Fails with `NotFound` if the board does not exist and `Forbidden` if
    /// `caller_id` is not its owner.
    pub async fn update(&self, board_id: i64, update: &BoardUpdate, caller_id: i64) -> Result<i64> {
        let mut tx = self.db.begin_write().await?;
        let mut repo = BoardRepository::new(&mut *tx);

        let board = owned_board(&mut repo, board_id, caller_id).await?;
        repo.update_content(board.id, update).await?;

        tx.commit().await?;
        info!(board_id, user_id = caller_id, "board updated");
        Ok(board_id)
    }

    /// Mark a board as deleted. Likes are kept.
    pub async fn soft_delete(&self, board_id: i64, caller_id: i64) -> Result<i64> {
        self.set_deleted(board_id, caller_id, true).await
    }

    /// Clear the deleted marker of a board.
    pub async fn restore(&self, board_id: i64, caller_id: i64) -> Result<i64> {
        self.set_deleted(board_id, caller_id, false).await
    }

    async fn set_deleted(&self, board_id: i64, caller_id: i64, is_deleted: bool) -> Result<i64> {
        let mut tx = self.db.begin_write().await?;
        let mut repo = BoardRepository::new(&mut *tx);

        owned_board(&mut repo, board_id, caller_id).await?;
        repo.set_deleted(board_id, is_deleted).await?;

        tx.commit().await?;
        info!(board_id, user_id = caller_id, is_deleted, "board delete flag changed");
        Ok(board_id)
    }

    /// Like a board.
    ///
    /// Liking a board twice is a no-op: the counter only moves when a new
    /// like row is created.
    pub async fn add_like(&self, request: &LikeRequest, user_id: i64) -> Result<i64> {
        let board_id = request.board_no;
        let mut tx = self.db.begin_write().await?;

        ensure_board_exists(&mut *tx, board_id).await?;
        let inserted = LikeRepository::new(&mut *tx).insert(user_id, board_id).await?;
        if inserted {
            BoardRepository::new(&mut *tx)
                .adjust_like_count(board_id, 1)
                .await?;
        }

        tx.commit().await?;
        if inserted {
            info!(board_id, user_id, "board liked");
        } else {
            debug!(board_id, user_id, "board already liked");
        }
        Ok(board_id)
    }

    /// Remove a like from a board.
    ///
    /// Unliking a board that was not liked leaves the counter unchanged.
    pub async fn remove_like(&self, request: &LikeRequest, user_id: i64) -> Result<i64> {
        let board_id = request.board_no;
        let mut tx = self.db.begin_write().await?;

        ensure_board_exists(&mut *tx, board_id).await?;
        let deleted = LikeRepository::new(&mut *tx).delete(user_id, board_id).await?;
        if deleted {
            BoardRepository::new(&mut *tx)
                .adjust_like_count(board_id, -1)
                .await?;
        }

        tx.commit().await?;
        if deleted {
            info!(board_id, user_id, "board unliked");
        } else {
            debug!(board_id, user_id, "unlike without a like");
        }
        Ok(board_id)
    }

    /// Nicknames of all users who like a board.
    pub async fn list_likers(&self, board_id: i64) -> Result<Vec<String>> {
        let mut conn = self.db.acquire().await?;
        LikeRepository::new(&mut conn).liker_nicknames(board_id).await
    }
}

/// Load a board and check that `caller_id` owns it.
async fn owned_board(
    repo: &mut BoardRepository<'_>,
    board_id: i64,
    caller_id: i64,
) -> Result<Board> {
    let board = repo
        .get_by_id(board_id)
        .await?
        .ok_or_else(|| NaiteError::not_found("board", board_id))?;

    if board.user_id != caller_id {
        return Err(NaiteError::Forbidden(format!(
            "board {board_id} is owned by another user"
        )));
    }
    Ok(board)
}

async fn ensure_board_exists(conn: &mut SqliteConnection, board_id: i64) -> Result<()> {
    BoardRepository::new(conn)
        .get_by_id(board_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| NaiteError::not_found("board", board_id))
}

async fn owner_nickname(conn: &mut SqliteConnection, user_id: i64) -> Result<String> {
    UserRepository::new(conn)
        .nickname_of(user_id)
        .await?
        .ok_or_else(|| NaiteError::not_found("user", user_id))
}

/// Attach owner nicknames to boards with one batched lookup.
async fn enrich(conn: &mut SqliteConnection, boards: Vec<Board>) -> Result<Vec<BoardView>> {
    let mut owner_ids: Vec<i64> = boards.iter().map(|b| b.user_id).collect();
    owner_ids.sort_unstable();
    owner_ids.dedup();

    let nicknames = UserRepository::new(conn).nicknames(&owner_ids).await?;

    boards
        .into_iter()
        .map(|board| {
            let nick = nicknames
                .get(&board.user_id)
                .cloned()
                .ok_or_else(|| NaiteError::not_found("user", board.user_id))?;
            Ok(BoardView::from_board(board, nick))
        })
        .collect()
}
