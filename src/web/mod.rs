//! Web API module for NAITE.
//!
//! This module exposes the board, like, review and account operations as a
//! JSON REST API authenticated with bearer JWTs.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::JwtState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
