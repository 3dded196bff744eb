//! NAITE - community board service
//!
//! Boards grouped into categories, likes with a denormalized counter,
//! star-rated reviews attached to boards, and the account store they rely
//! on. Everything is persisted in SQLite and served over a JSON API.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod review;
pub mod web;

pub use auth::{Argon2Verifier, CredentialVerifier, PasswordError};
pub use board::{BoardService, BoardView};
pub use config::Config;
pub use db::{Database, User, UserRepository};
pub use error::{NaiteError, Result};
pub use review::{ReviewService, ReviewView};
pub use web::WebServer;
