//! Comment endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_comment_lifecycle() {
    let app = TestApp::new();
    let (alice_id, alice) = app.signed_in("alice").await;
    let (bob_id, bob) = app.signed_in("bob").await;
    let photo_id = app.create_photo(&alice, "Sunset").await;

    let created = app
        .request(
            "POST",
            "/comments",
            Some(json!({ "message": "Lovely light", "photo_id": photo_id })),
            Some(&bob),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["user_id"], bob_id);
    assert_eq!(created.body["data"]["photo_id"], photo_id);
    let comment_id = created.body["data"]["id"].as_i64().unwrap();
    let path = format!("/comments/{comment_id}");

    let fetched = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["message"], "Lovely light");
    assert_eq!(fetched.body["data"]["user"]["username"], "bob");
    assert_eq!(fetched.body["data"]["photo"]["user_id"], alice_id);

    let listed = app.request("GET", "/comments", None, Some(&alice)).await;
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);

    let forbidden = app
        .request("PUT", &path, Some(json!({ "message": "Hijacked" })), Some(&alice))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(
        forbidden.body["message"],
        "You are not authorized to update this comment"
    );

    let edited = app
        .request("PUT", &path, Some(json!({ "message": "Lovely colours" })), Some(&bob))
        .await;
    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.body["data"]["message"], "Lovely colours");

    let deleted = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "No comment with that ID exists");
}

#[tokio::test]
async fn test_comment_on_missing_photo() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;

    let response = app
        .request(
            "POST",
            "/comments",
            Some(json!({ "message": "Hello?", "photo_id": 404 })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "No photo with that ID exists");
}

#[tokio::test]
async fn test_deleting_photo_removes_its_comments() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let photo_id = app.create_photo(&alice, "Sunset").await;

    let created = app
        .request(
            "POST",
            "/comments",
            Some(json!({ "message": "First", "photo_id": photo_id })),
            Some(&alice),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    app.request("DELETE", &format!("/photos/{photo_id}"), None, Some(&alice))
        .await;

    let listed = app.request("GET", "/comments", None, Some(&alice)).await;
    assert!(listed.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_message_is_required() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let photo_id = app.create_photo(&alice, "Sunset").await;

    let response = app
        .request(
            "POST",
            "/comments",
            Some(json!({ "message": "", "photo_id": photo_id })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
