//! Test helpers for Web API integration tests.
//!
//! Provides an in-memory server plus helpers to register and sign in users.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use naite::web::{create_router, AppState, JwtState};
use naite::{Argon2Verifier, Database};
use serde_json::{json, Value};

pub const JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let verifier = Arc::new(Argon2Verifier::with_params(1024, 1, 1).expect("argon2 params"));
    let app_state = Arc::new(AppState::new(db.clone(), JWT_SECRET, 900, verifier));
    let jwt_state = Arc::new(JwtState::new(JWT_SECRET));

    let router = create_router(app_state, jwt_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Register a user. The password is always `password123`.
pub async fn sign_up(server: &TestServer, login_id: &str, nickname: &str) -> Value {
    server
        .post("/api/auth/signup")
        .json(&json!({
            "login_id": login_id,
            "password": "password123",
            "nickname": nickname,
            "email": format!("{login_id}@example.com")
        }))
        .await
        .json::<Value>()
}

/// Register a user and return `(user_id, access_token)`.
pub async fn sign_up_and_in(server: &TestServer, login_id: &str, nickname: &str) -> (i64, String) {
    sign_up(server, login_id, nickname).await;

    let body: Value = server
        .post("/api/auth/signin")
        .json(&json!({ "login_id": login_id, "password": "password123" }))
        .await
        .json();

    let user_id = body["data"]["user"]["id"].as_i64().expect("user id");
    let token = body["data"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string();
    (user_id, token)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Board creation body.
pub fn board_body(title: &str, big_category_no: i32) -> Value {
    json!({
        "title": title,
        "content": format!("{title} content"),
        "big_category_no": big_category_no
    })
}

/// Create a board as the token's user and return its id.
pub async fn create_board(server: &TestServer, token: &str, title: &str, big_category_no: i32) -> i64 {
    let body: Value = server
        .post("/api/boards")
        .add_header(AUTHORIZATION, bearer(token))
        .json(&board_body(title, big_category_no))
        .await
        .json();

    body["data"]["id"].as_i64().expect("board id")
}
