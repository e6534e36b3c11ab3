//! Comment endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn create_uses_caller_as_author() {
    let app = TestApp::new().await;
    let (_, leo) = app.signed_in("leo");
    let (anna_user, anna) = app.signed_in("anna");
    let post_id = app.create_post(&leo, "rust").await["id"].as_i64().unwrap();

    let response = app
        .post_json_auth(
            "/comment/",
            json!({"post": post_id, "text": "Nice", "author": anna_user.id + 100}),
            &anna,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["author"], "anna");
    assert_eq!(response.body["post"], post_id);
    assert_eq!(response.body["text"], "Nice");
}

#[tokio::test]
async fn unknown_post_is_a_field_error() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");

    let response = app
        .post_json_auth("/comment/", json!({"post": 999, "text": "Nice"}), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_fields(), vec!["post"]);
    assert_eq!(
        response.first_error_message(),
        Some("Invalid pk \"999\" - object does not exist.")
    );
    assert_eq!(app.store.comment_count(), 0);
}

#[tokio::test]
async fn text_and_post_are_required() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");

    let response = app.post_json_auth("/comment/", json!({}), &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_fields(), vec!["post", "text"]);
}

#[tokio::test]
async fn list_returns_page_envelope() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");
    let post_id = app.create_post(&token, "rust").await["id"].as_i64().unwrap();
    for text in ["a", "b", "c"] {
        app.post_json_auth("/comment/", json!({"post": post_id, "text": text}), &token)
            .await;
    }

    let response = app.get_auth("/comment/?limit=2&offset=1", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 3);
    assert_eq!(response.body["previous"], "?limit=2&offset=0");
    assert!(response.body["next"].is_null());
    let texts: Vec<&str> = response.body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["b", "c"]);
}

#[tokio::test]
async fn delete_then_delete_again() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");
    let post_id = app.create_post(&token, "rust").await["id"].as_i64().unwrap();
    let comment = app
        .post_json_auth("/comment/", json!({"post": post_id, "text": "Nice"}), &token)
        .await;
    let uri = format!("/comment/{}/", comment.body["id"]);

    assert_eq!(app.delete_auth(&uri, &token).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete_auth(&uri, &token).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.comment_count(), 0);
}

#[tokio::test]
async fn comments_cannot_be_retrieved_individually() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");

    let response = app.get_auth("/comment/1/", &token).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn list_with_largest_offset_is_an_empty_page() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");
    let post_id = app.create_post(&token, "rust").await["id"].as_i64().unwrap();
    app.post_json_auth("/comment/", json!({"post": post_id, "text": "Nice"}), &token)
        .await;

    let response = app.get_auth("/comment/?offset=9223372036854775807", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 1);
    assert!(response.body["next"].is_null());
    assert_eq!(response.body["results"], json!([]));
}
