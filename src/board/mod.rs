//! Board module for NAITE.
//!
//! This module provides community board functionality including:
//! - Board lifecycle (create, update, soft delete, restore)
//! - Filtered listings enriched with owner nicknames
//! - The like relation and its denormalized counter

mod like_repository;
mod repository;
mod service;
mod types;

pub use like_repository::LikeRepository;
pub use repository::BoardRepository;
pub use service::BoardService;
pub use types::{
    Board, BoardOrder, BoardQuery, BoardSaveRequest, BoardUpdate, BoardView, LikeRequest,
    REDACTED_OWNER, TOP_LIKED_LIMIT,
};
