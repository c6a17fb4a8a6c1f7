//! Response DTOs for the Web API.

use serde::Serialize;

/// Login and registration response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Access token (JWT).
    pub access_token: String,
    /// Access token expiry in seconds.
    pub expires_in: u64,
    /// Profile information.
    pub user: UserInfo,
}

/// Profile information in responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// Profile ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Profile role.
    pub role: String,
}

/// Current-user response.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Profile ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Profile role.
    pub role: String,
    /// Email, when set.
    pub email: Option<String>,
    /// Bio, when set.
    pub bio: Option<String>,
}

/// Response for content-creating operations.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Human-readable message.
    pub message: String,
    /// ID of the created row.
    pub id: i64,
}

/// Generic message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}
