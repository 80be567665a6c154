//! Photo handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use photohub_core::types::id::PhotoId;
use photohub_entity::photo::PhotoSummary;

use crate::dto::request::PhotoRequest;
use crate::dto::response::{ApiResponse, PaginatedResponse, PhotoResponse, StatusResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::state::AppState;

/// POST /photos
pub async fn create_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PhotoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PhotoSummary>>)> {
    let photo = state.photo_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(photo.summary()))))
}

/// GET /photos
pub async fn list_photos(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<PhotoResponse>>> {
    let photos = state.photo_service.list(page).await?;
    Ok(Json(photos.map(PhotoResponse::from).into()))
}

/// GET /photos/{id}
pub async fn get_photo(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath<PhotoId>,
) -> ApiResult<Json<ApiResponse<PhotoResponse>>> {
    let photo = state.photo_service.get(id).await?;
    Ok(Json(ApiResponse::ok(photo.into())))
}

/// PUT /photos/{id}
pub async fn update_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<PhotoId>,
    ValidatedJson(req): ValidatedJson<PhotoRequest>,
) -> ApiResult<Json<ApiResponse<PhotoSummary>>> {
    let photo = state.photo_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(photo.summary())))
}

/// DELETE /photos/{id}
pub async fn delete_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<PhotoId>,
) -> ApiResult<Json<StatusResponse>> {
    state.photo_service.delete(&auth, id).await?;
    Ok(Json(StatusResponse::ok()))
}
