//! Web API content-creation tests.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{create_post, create_test_server, register_user};

#[tokio::test]
async fn test_create_post() {
    let (server, _db) = create_test_server().await;
    let token = register_user(&server, "alice", false).await;

    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "Hello", "content": "First post" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["message"], "Post created");
}

#[tokio::test]
async fn test_create_post_requires_auth() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/posts")
        .json(&json!({ "title": "Hello", "content": "First post" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_missing_fields() {
    let (server, _db) = create_test_server().await;
    let token = register_user(&server, "bob", false).await;

    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "No content" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": "No title" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_comment() {
    let (server, _db) = create_test_server().await;
    let alice = register_user(&server, "alice", false).await;
    let bob = register_user(&server, "bob", false).await;

    let post_id = create_post(&server, &alice, "Hello", "First post").await;

    let response = server
        .post("/api/comments")
        .add_header(AUTHORIZATION, format!("Bearer {}", bob))
        .json(&json!({ "post_id": post_id, "content": "Nice post" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_comment_on_missing_post() {
    let (server, _db) = create_test_server().await;
    let token = register_user(&server, "carol", false).await;

    let response = server
        .post("/api/comments")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "post_id": 999, "content": "Into the void" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_comment_missing_fields() {
    let (server, _db) = create_test_server().await;
    let token = register_user(&server, "dave", false).await;

    let response = server
        .post("/api/comments")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": "no post id" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
