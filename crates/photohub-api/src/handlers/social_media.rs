//! Social media link handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use photohub_core::types::id::SocialMediaId;
use photohub_entity::social_media::SocialMediaSummary;

use crate::dto::request::SocialMediaRequest;
use crate::dto::response::{ApiResponse, SocialMediaResponse, StatusResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /socialmedias
pub async fn create_social_media(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SocialMediaRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SocialMediaSummary>>)> {
    let link = state.social_media_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(link.summary()))))
}

/// GET /socialmedias
pub async fn list_social_medias(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<SocialMediaResponse>>>> {
    let links = state.social_media_service.list_mine(&auth).await?;
    Ok(Json(ApiResponse::ok(
        links.into_iter().map(SocialMediaResponse::from).collect(),
    )))
}

/// GET /socialmedias/{id}
pub async fn get_social_media(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath<SocialMediaId>,
) -> ApiResult<Json<ApiResponse<SocialMediaResponse>>> {
    let link = state.social_media_service.get(id).await?;
    Ok(Json(ApiResponse::ok(link.into())))
}

/// PUT /socialmedias/{id}
pub async fn update_social_media(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<SocialMediaId>,
    ValidatedJson(req): ValidatedJson<SocialMediaRequest>,
) -> ApiResult<Json<ApiResponse<SocialMediaSummary>>> {
    let link = state
        .social_media_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(link.summary())))
}

/// DELETE /socialmedias/{id}
pub async fn delete_social_media(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<SocialMediaId>,
) -> ApiResult<Json<StatusResponse>> {
    state.social_media_service.delete(&auth, id).await?;
    Ok(Json(StatusResponse::ok()))
}
