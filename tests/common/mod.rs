//! Shared helpers for Web API integration tests.

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use corkboard::config::{ModerationConfig, ServerConfig};
use corkboard::web::handlers::AppState;
use corkboard::web::middleware::JwtState;
use corkboard::web::router::{create_health_router, create_router};
use corkboard::Database;
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test configuration.
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        jwt_secret: "test-secret-key-for-testing-only".to_string(),
        jwt_access_token_expiry_secs: 900,
    }
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Arc<Database>) {
    let config = create_test_config();
    let moderation = ModerationConfig::default();

    let db = Arc::new(
        Database::open_in_memory()
            .await
            .expect("Failed to create test database"),
    );

    let app_state = Arc::new(AppState::new(
        db.clone(),
        &config.jwt_secret,
        config.jwt_access_token_expiry_secs,
        &moderation.default_reason_code,
    ));

    let jwt_state = Arc::new(JwtState::new(&config.jwt_secret));

    let router =
        create_router(app_state, jwt_state, &config.cors_origins).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Register an account and return its access token.
#[allow(dead_code)]
pub async fn register_user(server: &TestServer, username: &str, is_admin: bool) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "password": "test-password-123",
            "is_admin": is_admin
        }))
        .await;

    let body: Value = response.json();
    body["access_token"]
        .as_str()
        .expect("registration returns an access token")
        .to_string()
}

/// Create a post as the given token holder and return its ID.
#[allow(dead_code)]
pub async fn create_post(server: &TestServer, token: &str, title: &str, content: &str) -> i64 {
    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": title, "content": content }))
        .await;

    let body: Value = response.json();
    body["id"].as_i64().expect("post creation returns an id")
}

/// Create a comment as the given token holder and return its ID.
#[allow(dead_code)]
pub async fn create_comment(server: &TestServer, token: &str, post_id: i64, content: &str) -> i64 {
    let response = server
        .post("/api/comments")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "post_id": post_id, "content": content }))
        .await;

    let body: Value = response.json();
    body["id"].as_i64().expect("comment creation returns an id")
}

/// Suppress a post and return the raw response.
#[allow(dead_code)]
pub async fn suppress_post(
    server: &TestServer,
    token: &str,
    post_id: i64,
    reason: Option<&str>,
) -> axum_test::TestResponse {
    let body = match reason {
        Some(r) => json!({ "reason": r }),
        None => json!({}),
    };
    server
        .post(&format!("/api/posts/{}/suppress", post_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&body)
        .await
}

/// Suppress a comment and return the raw response.
#[allow(dead_code)]
pub async fn suppress_comment(
    server: &TestServer,
    token: &str,
    comment_id: i64,
    reason: Option<&str>,
) -> axum_test::TestResponse {
    let body = match reason {
        Some(r) => json!({ "reason": r }),
        None => json!({}),
    };
    server
        .post(&format!("/api/comments/{}/suppress", comment_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&body)
        .await
}
