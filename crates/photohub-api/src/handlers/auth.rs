//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use photohub_core::config::AuthConfig;
use photohub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::extractors::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::state::AppState;

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state.auth_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let outcome = state.auth_service.login(&req.email, &req.password).await?;
    let tokens = outcome.tokens;
    let auth = &state.config.auth;

    let jar = jar
        .add(session_cookie(
            auth,
            ACCESS_TOKEN_COOKIE,
            &tokens.access_token,
            tokens.access_max_age,
        )?)
        .add(session_cookie(
            auth,
            REFRESH_TOKEN_COOKIE,
            &tokens.refresh_token,
            tokens.refresh_max_age,
        )?);

    Ok((jar, Json(LoginResponse::new(tokens.access_token))))
}

/// Host-scoped, script-inaccessible cookie living as long as its token.
pub fn session_cookie(
    config: &AuthConfig,
    name: &str,
    value: &str,
    max_age_seconds: i64,
) -> Result<Cookie<'static>, AppError> {
    let mut raw = format!(
        "{name}={value}; Path=/; Domain={}; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}",
        config.cookie_domain
    );
    if config.cookie_secure {
        raw.push_str("; Secure");
    }
    Cookie::parse(raw)
        .map_err(|e| AppError::internal(format!("Failed to build {name} cookie: {e}")))
}
