//! Registration, login and the authentication gate.

use axum::http::StatusCode;
use serde_json::json;

use photohub_auth::TokenService;
use photohub_auth::jwt::issue;
use photohub_core::types::id::UserId;

use crate::helpers::{PASSWORD, TestApp};

fn register_body(username: &str, email: &str, password: &str, age: i32) -> serde_json::Value {
    json!({
        "username": username,
        "email": email,
        "password": password,
        "age": age,
    })
}

/// `name=value` from the matching `Set-Cookie` header.
fn cookie_value(cookies: &[String], name: &str) -> Option<String> {
    cookies.iter().find_map(|c| {
        c.split(';')
            .next()
            .and_then(|pair| pair.strip_prefix(&format!("{name}=")))
            .map(String::from)
    })
}

#[tokio::test]
async fn test_register_lowercases_email_and_hides_hash() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/users/register",
            Some(register_body("alice", "A@X.com", PASSWORD, 20)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["data"]["email"], "a@x.com");
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["age"], 20);
    assert!(response.body["data"].get("password_hash").is_none());
    assert!(response.body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_ignores_case() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(register_body("alice2", "ALICE@x.com", PASSWORD, 30)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.body["message"], "User with that email already exists");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(register_body("alice", "other@x.com", PASSWORD, 30)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Username already exists");
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = TestApp::new();

    for body in [
        register_body("alice", "not-an-email", PASSWORD, 20),
        register_body("alice", "a@x.com", PASSWORD, 7),
        register_body("", "a@x.com", PASSWORD, 20),
        json!({ "username": "alice", "email": "a@x.com" }),
    ] {
        let response = app.request("POST", "/users/register", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
        assert_eq!(response.body["status"], "fail");
    }
}

#[tokio::test]
async fn test_register_enforces_password_length() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/users/register",
            Some(register_body("alice", "a@x.com", "short", 20)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Password must be at least 6 characters long"
    );
}

#[tokio::test]
async fn test_login_sets_session_cookies() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "alice@x.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    let access_token = response.body["access_token"].as_str().unwrap();
    assert!(!access_token.is_empty());

    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 2);
    assert_eq!(cookie_value(&cookies, "access_token").as_deref(), Some(access_token));
    assert!(cookie_value(&cookies, "refresh_token").is_some());

    let access = cookies.iter().find(|c| c.starts_with("access_token=")).unwrap();
    assert!(access.contains("HttpOnly"));
    assert!(access.contains("Path=/"));
    assert!(access.contains("Max-Age=900"));
    let refresh = cookies.iter().find(|c| c.starts_with("refresh_token=")).unwrap();
    assert!(refresh.contains("Max-Age=3600"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("alice").await;

    let wrong_password = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "alice@x.com", "password": "wrong-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "nobody@x.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "You are not logged in");
}

#[tokio::test]
async fn test_invalid_tokens_share_one_message() {
    let app = TestApp::new();
    let (id, _) = app.signed_in("alice").await;

    let tokens = TokenService::from_config(&app.config.auth).unwrap();
    let expired = issue(
        UserId::new(id),
        chrono::Duration::minutes(-1),
        tokens.access_signing_key(),
    )
    .unwrap();
    let refresh = tokens.issue_session(UserId::new(id)).unwrap().refresh_token;

    for token in ["garbage", expired.as_str(), refresh.as_str()] {
        let response = app.request("GET", "/users/me", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid or expired token");
    }
}

#[tokio::test]
async fn test_cookie_authenticates_without_header() {
    let app = TestApp::new();
    let (_, token) = app.signed_in("alice").await;

    let response = app.request_with_cookie("GET", "/users/me", &token).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "alice");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let (_, token) = app.signed_in("alice").await;
    app.register("bob").await;

    let taken = app
        .request(
            "PUT",
            "/users",
            Some(json!({ "username": "bob", "email": "alice@x.com", "age": 21 })),
            Some(&token),
        )
        .await;
    assert_eq!(taken.status, StatusCode::CONFLICT);
    assert_eq!(taken.body["message"], "Username already exists");

    let response = app
        .request(
            "PUT",
            "/users",
            Some(json!({
                "username": "alice_b",
                "email": "Alice.B@x.com",
                "age": 21,
                "profile_image_url": "https://img.example.com/alice.png",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "alice_b");
    assert_eq!(response.body["data"]["email"], "alice.b@x.com");
    assert_eq!(response.body["data"]["age"], 21);
}

#[tokio::test]
async fn test_deleted_account_cascades_and_token_stops_working() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;
    let photo_id = app.create_photo(&alice, "Sunset").await;

    let response = app.request("DELETE", "/users", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));

    let me = app.request("GET", "/users/me", None, Some(&alice)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        me.body["message"],
        "The user belonging to this token no longer exists"
    );

    let photo = app
        .request("GET", &format!("/photos/{photo_id}"), None, Some(&bob))
        .await;
    assert_eq!(photo.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
}
