//! Self-service account handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{ApiResponse, StatusResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<UserResponse>> {
    let user = state.user_service.get_profile(&auth);
    Json(ApiResponse::ok(user.into()))
}

/// PUT /users
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.update_profile(&auth, req.into()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /users
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatusResponse>> {
    state.user_service.delete_account(&auth).await?;
    Ok(Json(StatusResponse::ok()))
}
