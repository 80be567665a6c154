//! Social media link endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn link(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "social_media_url": format!("https://{name}.example.com/me"),
    })
}

#[tokio::test]
async fn test_list_shows_only_own_links() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;

    let created = app
        .request("POST", "/socialmedias", Some(link("mastodon")), Some(&alice))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    app.request("POST", "/socialmedias", Some(link("pixelfed")), Some(&bob))
        .await;

    let listed = app.request("GET", "/socialmedias", None, Some(&alice)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let items = listed.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "mastodon");
    assert_eq!(items[0]["user"]["username"], "alice");
}

#[tokio::test]
async fn test_only_owner_may_mutate_link() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;

    let created = app
        .request("POST", "/socialmedias", Some(link("mastodon")), Some(&alice))
        .await;
    let id = created.body["data"]["id"].as_i64().unwrap();
    let path = format!("/socialmedias/{id}");

    let fetched = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["user"]["username"], "alice");

    let forbidden = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let updated = app
        .request("PUT", &path, Some(link("pixelfed")), Some(&alice))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "pixelfed");

    let deleted = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(
        gone.body["message"],
        "No social media entry with that ID exists"
    );
}

#[tokio::test]
async fn test_link_url_must_be_valid() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;

    let response = app
        .request(
            "POST",
            "/socialmedias",
            Some(json!({ "name": "mastodon", "social_media_url": "not a url" })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
