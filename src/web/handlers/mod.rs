//! API handlers for Web API.

pub mod auth;
pub mod board;
pub mod review;

pub use auth::*;
pub use board::*;
pub use review::*;
