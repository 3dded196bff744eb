//! Web API Board Tests
//!
//! Integration tests for board and like endpoints.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{bearer, board_body, create_board, create_test_server, sign_up_and_in};
use serde_json::{json, Value};

fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Create / Read Tests
// ============================================================================

#[tokio::test]
async fn test_list_boards_empty() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/boards").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_board_requires_auth() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/boards")
        .json(&board_body("Bike", 1))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_get_board() {
    let (server, _db) = create_test_server().await;
    let (_, token) = sign_up_and_in(&server, "alice01", "Alice").await;

    let response = server
        .post("/api/boards")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "title": "Bike",
            "content": "Barely used",
            "pic": "bike.png",
            "big_category_no": 2
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/boards/{id}")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let board = &body["data"];
    assert_eq!(board["board_no"], id);
    assert_eq!(board["user_no"], 0);
    assert_eq!(board["user_nick"], "Alice");
    assert_eq!(board["pic"], "bike.png");
    assert_eq!(board["like_count"], 0);
    assert_eq!(board["open_flag"], true);
    assert_eq!(board["liked_by"], json!([]));
}

#[tokio::test]
async fn test_get_missing_board() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/boards/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_board_validation() {
    let (server, _db) = create_test_server().await;
    let (_, token) = sign_up_and_in(&server, "alice01", "Alice").await;

    let response = server
        .post("/api/boards")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "title": "  ", "content": "x", "big_category_no": 0 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["error"]["details"]["title"].is_array());
    assert!(body["error"]["details"]["big_category_no"].is_array());
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_listings_are_newest_first_and_filtered() {
    let (server, _db) = create_test_server().await;
    let (_, alice) = sign_up_and_in(&server, "alice01", "Alice").await;
    let (_, bob) = sign_up_and_in(&server, "bob0001", "Bob").await;

    create_board(&server, &alice, "Old lamp", 1).await;
    create_board(&server, &bob, "Desk", 2).await;
    create_board(&server, &alice, "New lamp", 1).await;

    let body: Value = server.get("/api/boards").await.json();
    assert_eq!(titles(&body), vec!["New lamp", "Desk", "Old lamp"]);

    let body: Value = server.get("/api/boards/category/1").await.json();
    assert_eq!(titles(&body), vec!["New lamp", "Old lamp"]);

    let body: Value = server
        .get("/api/boards/search")
        .add_query_param("title", "lamp")
        .await
        .json();
    assert_eq!(titles(&body), vec!["New lamp", "Old lamp"]);

    let body: Value = server
        .get("/api/boards/mine")
        .add_header(AUTHORIZATION, bearer(&bob))
        .await
        .json();
    assert_eq!(titles(&body), vec!["Desk"]);
}

#[tokio::test]
async fn test_title_search_is_case_sensitive() {
    let (server, _db) = create_test_server().await;
    let (_, token) = sign_up_and_in(&server, "alice01", "Alice").await;
    create_board(&server, &token, "Lamp", 1).await;

    let body: Value = server
        .get("/api/boards/search")
        .add_query_param("title", "lamp")
        .await
        .json();

    assert!(titles(&body).is_empty());
}

#[tokio::test]
async fn test_top_liked_is_capped() {
    let (server, _db) = create_test_server().await;
    let (_, alice) = sign_up_and_in(&server, "alice01", "Alice").await;
    let (_, bob) = sign_up_and_in(&server, "bob0001", "Bob").await;

    let mut ids = Vec::new();
    for i in 0..7 {
        ids.push(create_board(&server, &alice, &format!("Board {i}"), 3).await);
    }
    server
        .post("/api/likes")
        .add_header(AUTHORIZATION, bearer(&bob))
        .json(&json!({ "board_no": ids[6] }))
        .await
        .assert_status_ok();

    let body: Value = server.get("/api/boards/category/3/top").await.json();
    let boards = body["data"].as_array().unwrap();
    assert_eq!(boards.len(), 5);
    assert_eq!(boards[0]["board_no"], ids[6]);
    assert_eq!(boards[0]["like_count"], 1);
}

// ============================================================================
// Ownership Tests
// ============================================================================

#[tokio::test]
async fn test_update_board_owner_only() {
    let (server, _db) = create_test_server().await;
    let (_, alice) = sign_up_and_in(&server, "alice01", "Alice").await;
    let (_, bob) = sign_up_and_in(&server, "bob0001", "Bob").await;
    let id = create_board(&server, &alice, "Bike", 1).await;

    let update = json!({ "title": "Bike (sold)", "content": "Gone", "open_flag": false });

    server
        .put(&format!("/api/boards/{id}"))
        .add_header(AUTHORIZATION, bearer(&bob))
        .json(&update)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let response = server
        .put(&format!("/api/boards/{id}"))
        .add_header(AUTHORIZATION, bearer(&alice))
        .json(&update)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["id"], id);

    let body: Value = server.get(&format!("/api/boards/{id}")).await.json();
    assert_eq!(body["data"]["title"], "Bike (sold)");
    assert_eq!(body["data"]["open_flag"], false);
    assert_eq!(body["data"]["big_category_no"], 1);
}

#[tokio::test]
async fn test_soft_delete_and_restore() {
    let (server, _db) = create_test_server().await;
    let (_, alice) = sign_up_and_in(&server, "alice01", "Alice").await;
    let (_, bob) = sign_up_and_in(&server, "bob0001", "Bob").await;
    let id = create_board(&server, &alice, "Bike", 1).await;

    server
        .delete(&format!("/api/boards/{id}"))
        .add_header(AUTHORIZATION, bearer(&bob))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    server
        .delete(&format!("/api/boards/{id}"))
        .add_header(AUTHORIZATION, bearer(&alice))
        .await
        .assert_status_ok();

    let body: Value = server.get("/api/boards").await.json();
    assert!(titles(&body).is_empty());

    // Detail still resolves, flagged as deleted.
    let body: Value = server.get(&format!("/api/boards/{id}")).await.json();
    assert_eq!(body["data"]["is_deleted"], true);

    server
        .post(&format!("/api/boards/{id}/restore"))
        .add_header(AUTHORIZATION, bearer(&alice))
        .await
        .assert_status_ok();

    let body: Value = server.get("/api/boards").await.json();
    assert_eq!(titles(&body), vec!["Bike"]);
}

#[tokio::test]
async fn test_delete_missing_board() {
    let (server, _db) = create_test_server().await;
    let (_, alice) = sign_up_and_in(&server, "alice01", "Alice").await;

    server
        .delete("/api/boards/404")
        .add_header(AUTHORIZATION, bearer(&alice))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_walkthrough() {
    let (server, _db) = create_test_server().await;
    let (_, alice) = sign_up_and_in(&server, "alice01", "Alice").await;
    let (_, bob) = sign_up_and_in(&server, "bob0001", "Bob").await;
    let id = create_board(&server, &alice, "Bike", 1).await;

    let like_count = |body: Value| body["data"]["like_count"].as_i64().unwrap();

    for _ in 0..2 {
        server
            .post("/api/likes")
            .add_header(AUTHORIZATION, bearer(&bob))
            .json(&json!({ "board_no": id }))
            .await
            .assert_status_ok();
    }
    let body: Value = server.get(&format!("/api/boards/{id}")).await.json();
    assert_eq!(body["data"]["liked_by"], json!(["Bob"]));
    assert_eq!(like_count(body), 1);

    let body: Value = server
        .get(&format!("/api/boards/{id}/likes"))
        .await
        .json();
    assert_eq!(body["data"], json!(["Bob"]));

    let body: Value = server
        .get("/api/likes/mine")
        .add_header(AUTHORIZATION, bearer(&bob))
        .await
        .json();
    assert_eq!(titles(&body), vec!["Bike"]);

    for _ in 0..2 {
        server
            .delete("/api/likes")
            .add_header(AUTHORIZATION, bearer(&bob))
            .json(&json!({ "board_no": id }))
            .await
            .assert_status_ok();
    }
    let body: Value = server.get(&format!("/api/boards/{id}")).await.json();
    assert_eq!(like_count(body), 0);
}

#[tokio::test]
async fn test_like_missing_board() {
    let (server, _db) = create_test_server().await;
    let (_, bob) = sign_up_and_in(&server, "bob0001", "Bob").await;

    server
        .post("/api/likes")
        .add_header(AUTHORIZATION, bearer(&bob))
        .json(&json!({ "board_no": 77 }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_requires_auth() {
    let (server, _db) = create_test_server().await;

    server
        .post("/api/likes")
        .json(&json!({ "board_no": 1 }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
