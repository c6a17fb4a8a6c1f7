//! Request DTOs for the Web API.
//!
//! Content fields are deserialized as options so handlers can reject
//! missing fields with a 400 instead of a body-rejection status.

use serde::Deserialize;

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Account registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Whether to grant a moderating role.
    #[serde(default)]
    pub is_admin: bool,
    /// Email (optional).
    #[serde(default)]
    pub email: Option<String>,
    /// Profile bio (optional).
    #[serde(default)]
    pub bio: Option<String>,
}

/// Post creation request.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    pub title: Option<String>,
    /// Post body.
    pub content: Option<String>,
}

/// Comment creation request.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Parent post ID.
    pub post_id: Option<i64>,
    /// Comment body.
    pub content: Option<String>,
}

/// Suppression request.
#[derive(Debug, Deserialize)]
pub struct SuppressRequest {
    /// Reason code; the configured default applies when absent.
    #[serde(default)]
    pub reason: Option<String>,
}
