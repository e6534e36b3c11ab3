//! Follow endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn subscribe_creates_edge_from_caller() {
    let app = TestApp::new().await;
    let (leo, token) = app.signed_in("leo");
    let anna = app.store.add_user("anna");
    let tolstoy = app.store.add_user("tolstoy");

    let response = app
        .post_json_auth(
            "/subscribe/",
            json!({"following": "anna", "user": "tolstoy"}),
            &token,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({"user": "leo", "following": "anna"}));

    let follows = app.store.follows();
    assert_eq!(follows.len(), 1);
    assert_eq!(follows[0].user_id, leo.id);
    assert_eq!(follows[0].following_id, anna.id);
    assert_ne!(follows[0].user_id, tolstoy.id);
}

#[tokio::test]
async fn unknown_username_writes_nothing() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");

    let response = app
        .post_json_auth("/subscribe/", json!({"following": "ghost"}), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_fields(), vec!["following"]);
    assert_eq!(
        response.first_error_message(),
        Some("Object with username=ghost does not exist.")
    );
    assert!(app.store.follows().is_empty());
}

#[tokio::test]
async fn following_is_required() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");

    let response = app.post_json_auth("/subscribe/", json!({}), &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_fields(), vec!["following"]);
}

#[tokio::test]
async fn self_and_repeat_follows_are_stored() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");

    for _ in 0..2 {
        let response = app
            .post_json_auth("/subscribe/", json!({"following": "leo"}), &token)
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    assert_eq!(app.store.follows().len(), 2);
}
