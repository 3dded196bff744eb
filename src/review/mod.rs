//! Review module for NAITE.
//!
//! Reviews extend a board with a star rating and a small category.

mod repository;
mod service;
mod types;

pub use repository::ReviewRepository;
pub use service::ReviewService;
pub use types::{
    Review, ReviewBoard, ReviewSaveRequest, ReviewUpdate, ReviewView, MAX_REVIEW_STAR,
    MIN_REVIEW_STAR,
};
