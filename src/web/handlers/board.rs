//! Board and like handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::board::{BoardService, BoardView, LikeRequest};
use crate::web::dto::{
    ApiResponse, BoardResponse, CreateBoardRequest, IdResponse, LikeBoardRequest,
    TitleSearchQuery, UpdateBoardRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

type BoardListResponse = Json<ApiResponse<Vec<BoardResponse>>>;

fn board_list(views: Vec<BoardView>) -> BoardListResponse {
    Json(ApiResponse::new(
        views.into_iter().map(BoardResponse::from).collect(),
    ))
}

fn id_response(id: i64) -> Json<ApiResponse<IdResponse>> {
    Json(ApiResponse::new(IdResponse { id }))
}

/// GET /api/boards - List all live boards.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<BoardListResponse, ApiError> {
    let views = BoardService::new(&state.db).list_all().await?;
    Ok(board_list(views))
}

/// GET /api/boards/search?title= - Search live boards by title.
pub async fn search_boards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TitleSearchQuery>,
) -> Result<BoardListResponse, ApiError> {
    let views = BoardService::new(&state.db)
        .list_by_title(&query.title)
        .await?;
    Ok(board_list(views))
}

/// GET /api/boards/mine - List the caller's live boards.
pub async fn my_boards(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
) -> Result<BoardListResponse, ApiError> {
    let views = BoardService::new(&state.db)
        .list_by_user(caller.user_id())
        .await?;
    Ok(board_list(views))
}

/// GET /api/boards/category/:no - List live boards in a big category.
pub async fn list_by_category(
    State(state): State<Arc<AppState>>,
    Path(big_category_no): Path<i32>,
) -> Result<BoardListResponse, ApiError> {
    let views = BoardService::new(&state.db)
        .list_by_category(big_category_no)
        .await?;
    Ok(board_list(views))
}

/// GET /api/boards/category/:no/top - Most liked boards in a big category.
pub async fn top_liked(
    State(state): State<Arc<AppState>>,
    Path(big_category_no): Path<i32>,
) -> Result<BoardListResponse, ApiError> {
    let views = BoardService::new(&state.db)
        .list_top_liked(big_category_no)
        .await?;
    Ok(board_list(views))
}

/// GET /api/boards/:id - Board detail with likers.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiError> {
    let view = BoardService::new(&state.db).get_by_id(board_id).await?;
    Ok(Json(ApiResponse::new(view.into())))
}

/// GET /api/boards/:id/likes - Nicknames of a board's likers.
pub async fn list_likers(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let likers = BoardService::new(&state.db).list_likers(board_id).await?;
    Ok(Json(ApiResponse::new(likers)))
}

/// POST /api/boards - Create a board owned by the caller.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<(StatusCode, Json<ApiResponse<IdResponse>>), ApiError> {
    let id = BoardService::new(&state.db)
        .create(&req.into(), caller.user_id())
        .await?;
    Ok((StatusCode::CREATED, id_response(id)))
}

/// PUT /api/boards/:id - Update one of the caller's boards.
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateBoardRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let id = BoardService::new(&state.db)
        .update(board_id, &req.into(), caller.user_id())
        .await?;
    Ok(id_response(id))
}

/// DELETE /api/boards/:id - Soft delete one of the caller's boards.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let id = BoardService::new(&state.db)
        .soft_delete(board_id, caller.user_id())
        .await?;
    Ok(id_response(id))
}

/// POST /api/boards/:id/restore - Restore one of the caller's boards.
pub async fn restore_board(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let id = BoardService::new(&state.db)
        .restore(board_id, caller.user_id())
        .await?;
    Ok(id_response(id))
}

/// POST /api/likes - Like a board.
pub async fn add_like(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    ValidatedJson(req): ValidatedJson<LikeBoardRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let id = BoardService::new(&state.db)
        .add_like(&LikeRequest::new(req.board_no), caller.user_id())
        .await?;
    Ok(id_response(id))
}

/// DELETE /api/likes - Withdraw a like.
pub async fn remove_like(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    ValidatedJson(req): ValidatedJson<LikeBoardRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let id = BoardService::new(&state.db)
        .remove_like(&LikeRequest::new(req.board_no), caller.user_id())
        .await?;
    Ok(id_response(id))
}

/// GET /api/likes/mine - Live boards the caller has liked.
pub async fn my_likes(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
) -> Result<BoardListResponse, ApiError> {
    let views = BoardService::new(&state.db)
        .list_liked_by_user(caller.user_id())
        .await?;
    Ok(board_list(views))
}
