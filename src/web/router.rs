//! Router configuration for Web API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_like, change_password, create_board, create_review, delete_board, get_board,
    get_review, list_boards, list_by_category, list_likers, list_reviews,
    list_reviews_by_category, me, my_boards, my_likes, remove_like, restore_board,
    search_boards, signin, signup, top_liked, update_board, update_review, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/me", get(me))
        .route("/password", put(change_password));

    // Static segments take precedence over `/:id`.
    let board_routes = Router::new()
        .route("/", get(list_boards).post(create_board))
        .route("/search", get(search_boards))
        .route("/mine", get(my_boards))
        .route("/category/:no", get(list_by_category))
        .route("/category/:no/top", get(top_liked))
        .route("/:id", get(get_board).put(update_board).delete(delete_board))
        .route("/:id/likes", get(list_likers))
        .route("/:id/restore", post(restore_board));

    let like_routes = Router::new()
        .route("/", post(add_like).delete(remove_like))
        .route("/mine", get(my_likes));

    let review_routes = Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/category/:no", get(list_reviews_by_category))
        .route("/:id", get(get_review).put(update_review));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/boards", board_routes)
        .nest("/likes", like_routes)
        .nest("/reviews", review_routes);

    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> &'static str {
    "OK"
}
