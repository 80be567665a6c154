//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tower::ServiceExt;

use photohub_api::{AppState, build_app};
use photohub_core::config::AppConfig;
use photohub_database::Stores;

const ACCESS_PRIVATE: &str = include_str!("../fixtures/keys/access_private.pem");
const ACCESS_PUBLIC: &str = include_str!("../fixtures/keys/access_public.pem");
const REFRESH_PRIVATE: &str = include_str!("../fixtures/keys/refresh_private.pem");
const REFRESH_PUBLIC: &str = include_str!("../fixtures/keys/refresh_public.pem");

/// Default password used by [`TestApp::register`].
pub const PASSWORD: &str = "secret1";

/// Configuration for an app backed by the in-memory store, with cheap
/// Argon2 parameters.
pub fn test_config() -> AppConfig {
    let source = format!(
        r#"
        [database]
        provider = "memory"

        [auth]
        access_token_private_key = "{}"
        access_token_public_key = "{}"
        refresh_token_private_key = "{}"
        refresh_token_public_key = "{}"
        cookie_domain = "localhost"

        [auth.argon2]
        memory_kib = 1024
        iterations = 1
        parallelism = 1
        "#,
        STANDARD.encode(ACCESS_PRIVATE),
        STANDARD.encode(ACCESS_PUBLIC),
        STANDARD.encode(REFRESH_PRIVATE),
        STANDARD.encode(REFRESH_PUBLIC),
    );
    AppConfig::from_toml(&source).expect("test config should parse")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let config = test_config();
        let state = AppState::new(config.clone(), Stores::memory()).expect("app state");
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Register a user whose email is `{username}@x.com`; returns the id.
    pub async fn register(&self, username: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/users/register",
                Some(json!({
                    "username": username,
                    "email": format!("{username}@x.com"),
                    "password": PASSWORD,
                    "age": 20,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("user id")
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/users/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }

    /// Register and log in; returns `(user id, access token)`.
    pub async fn signed_in(&self, username: &str) -> (i64, String) {
        let id = self.register(username).await;
        let token = self.login(&format!("{username}@x.com"), PASSWORD).await;
        (id, token)
    }

    /// Create a photo and return its id.
    pub async fn create_photo(&self, token: &str, title: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/photos",
                Some(json!({
                    "title": title,
                    "caption": "Taken at dusk",
                    "photo_url": "https://img.example.com/p.jpg",
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("photo id")
    }

    /// Send a JSON request with an optional bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(req, body).await
    }

    /// Send a request authenticated only by the `access_token` cookie.
    pub async fn request_with_cookie(&self, method: &str, path: &str, token: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::COOKIE, format!("access_token={token}"));
        self.send(req, None).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("serialize body"))),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Every `Set-Cookie` header value.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect()
    }
}
