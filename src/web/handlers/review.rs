//! Review handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::review::{ReviewSaveRequest, ReviewService, ReviewUpdate};
use crate::web::dto::{
    ApiResponse, CreateReviewRequest, IdResponse, ReviewResponse, UpdateReviewRequest,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// GET /api/reviews - List reviews of live boards.
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, ApiError> {
    let reviews = ReviewService::new(&state.db).list_all().await?;
    Ok(Json(ApiResponse::new(
        reviews.into_iter().map(ReviewResponse::from).collect(),
    )))
}

/// GET /api/reviews/category/:no - List reviews in a small category.
pub async fn list_reviews_by_category(
    State(state): State<Arc<AppState>>,
    Path(small_category_no): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, ApiError> {
    let reviews = ReviewService::new(&state.db)
        .list_by_category(small_category_no)
        .await?;
    Ok(Json(ApiResponse::new(
        reviews.into_iter().map(ReviewResponse::from).collect(),
    )))
}

/// GET /api/reviews/:id - Review detail.
pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<i64>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    let review = ReviewService::new(&state.db).get_by_id(review_id).await?;
    Ok(Json(ApiResponse::new(review.into())))
}

/// POST /api/reviews - Create a review and its board.
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<IdResponse>>), ApiError> {
    let request = ReviewSaveRequest::new(
        req.board.into(),
        caller.user_id(),
        req.review_star,
        req.small_category_no,
    );
    let id = ReviewService::new(&state.db).create(&request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(IdResponse { id }))))
}

/// PUT /api/reviews/:id - Update a review and its board.
///
/// Only the owner of the review's board may update it.
pub async fn update_review(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Path(review_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateReviewRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let update = ReviewUpdate::new(
        req.review_star,
        req.small_category_no,
        req.board_no,
        req.board.into(),
    );
    let id = ReviewService::new(&state.db)
        .update(review_id, &update, caller.user_id())
        .await?;
    Ok(Json(ApiResponse::new(IdResponse { id })))
}
