//! Photo endpoints and the ownership rule.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn photo_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "caption": "Edited",
        "photo_url": "https://img.example.com/edited.jpg",
    })
}

#[tokio::test]
async fn test_create_and_get_photo_with_owner() {
    let app = TestApp::new();
    let (alice_id, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;

    let photo_id = app.create_photo(&alice, "Sunset").await;

    let response = app
        .request("GET", &format!("/photos/{photo_id}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["title"], "Sunset");
    assert_eq!(data["user_id"], alice_id);
    assert_eq!(data["user"]["username"], "alice");
    assert_eq!(data["user"]["email"], "alice@x.com");
}

#[tokio::test]
async fn test_list_photos_paginates() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    for i in 1..=3 {
        app.create_photo(&alice, &format!("Photo {i}")).await;
    }

    let response = app
        .request("GET", "/photos?page=2&limit=2", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["limit"], 2);
    assert_eq!(response.body["total_items"], 3);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Photo 3");
    assert_eq!(items[0]["user"]["username"], "alice");

    let bad = app
        .request("GET", "/photos?page=first", None, Some(&alice))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_page_far_past_the_end_is_empty() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    app.create_photo(&alice, "Sunset").await;

    let response = app
        .request("GET", "/photos?page=10000000000000000000", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 1);
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_only_owner_may_mutate_photo() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;
    let photo_id = app.create_photo(&alice, "Sunset").await;
    let path = format!("/photos/{photo_id}");

    let update = app
        .request("PUT", &path, Some(photo_body("Mine now")), Some(&bob))
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);
    assert_eq!(
        update.body["message"],
        "You are not authorized to update this photo"
    );

    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let update = app
        .request("PUT", &path, Some(photo_body("Dusk")), Some(&alice))
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.body["data"]["title"], "Dusk");
    assert_eq!(update.body["data"]["caption"], "Edited");

    let delete = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(delete.status, StatusCode::OK);
    assert_eq!(delete.body, json!({ "status": "success" }));

    let gone = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "No photo with that ID exists");
}

#[tokio::test]
async fn test_missing_photo_is_not_found_before_ownership() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;

    let response = app
        .request("PUT", "/photos/999", Some(photo_body("Nope")), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_photo_input_validation() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;

    let bad_url = app
        .request(
            "POST",
            "/photos",
            Some(json!({ "title": "Sunset", "photo_url": "sunset.jpg" })),
            Some(&alice),
        )
        .await;
    assert_eq!(bad_url.status, StatusCode::BAD_REQUEST);

    let bad_id = app.request("GET", "/photos/abc", None, Some(&alice)).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["message"], "Invalid id: abc");
}

#[tokio::test]
async fn test_photos_require_authentication() {
    let app = TestApp::new();
    let response = app.request("GET", "/photos", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
