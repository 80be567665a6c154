//! Route definitions for the PhotoHub HTTP API.
//!
//! Routes are grouped by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logging layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(photo_routes())
        .merge(comment_routes())
        .merge(social_media_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, login and self-service account endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(handlers::auth::register))
        .route("/users/login", post(handlers::auth::login))
        .route("/users/me", get(handlers::user::get_profile))
        .route(
            "/users",
            put(handlers::user::update_profile).delete(handlers::user::delete_account),
        )
}

/// Photo CRUD
fn photo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/photos",
            post(handlers::photo::create_photo).get(handlers::photo::list_photos),
        )
        .route(
            "/photos/{id}",
            get(handlers::photo::get_photo)
                .put(handlers::photo::update_photo)
                .delete(handlers::photo::delete_photo),
        )
}

/// Comment CRUD
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments",
            post(handlers::comment::create_comment).get(handlers::comment::list_comments),
        )
        .route(
            "/comments/{id}",
            get(handlers::comment::get_comment)
                .put(handlers::comment::update_comment)
                .delete(handlers::comment::delete_comment),
        )
}

/// Social media link CRUD
fn social_media_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/socialmedias",
            post(handlers::social_media::create_social_media)
                .get(handlers::social_media::list_social_medias),
        )
        .route(
            "/socialmedias/{id}",
            get(handlers::social_media::get_social_media)
                .put(handlers::social_media::update_social_media)
                .delete(handlers::social_media::delete_social_media),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
