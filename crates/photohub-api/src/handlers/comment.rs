//! Comment handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use photohub_core::types::id::CommentId;
use photohub_entity::comment::CommentSummary;

use crate::dto::request::{CreateCommentRequest, UpdateCommentRequest};
use crate::dto::response::{ApiResponse, CommentResponse, StatusResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CommentSummary>>)> {
    let comment = state
        .comment_service
        .create(&auth, req.photo_id, req.message)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment.summary()))))
}

/// GET /comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<CommentResponse>>>> {
    let comments = state.comment_service.list().await?;
    Ok(Json(ApiResponse::ok(
        comments.into_iter().map(CommentResponse::from).collect(),
    )))
}

/// GET /comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath<CommentId>,
) -> ApiResult<Json<ApiResponse<CommentResponse>>> {
    let comment = state.comment_service.get(id).await?;
    Ok(Json(ApiResponse::ok(comment.into())))
}

/// PUT /comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<CommentId>,
    ValidatedJson(req): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<ApiResponse<CommentSummary>>> {
    let comment = state.comment_service.update(&auth, id, req.message).await?;
    Ok(Json(ApiResponse::ok(comment.summary())))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<CommentId>,
) -> ApiResult<Json<StatusResponse>> {
    state.comment_service.delete(&auth, id).await?;
    Ok(Json(StatusResponse::ok()))
}
