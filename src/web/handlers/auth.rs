//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::db::{NewProfile, ProfileRepository, Role};
use crate::web::dto::request::{LoginRequest, RegisterRequest};
use crate::web::dto::response::{AuthResponse, MeResponse, UserInfo};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// POST /api/auth/register - Account registration.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if req.username.is_empty() {
        return Err(ApiError::bad_request("Username is required"));
    }
    if req.password.is_empty() {
        return Err(ApiError::bad_request("Password is required"));
    }

    crate::validate_password(&req.password)
        .map_err(|e| ApiError::bad_request(format!("Password error: {}", e)))?;

    let password_hash =
        crate::hash_password(&req.password).map_err(|_| ApiError::internal("Failed to hash password"))?;

    let role = if req.is_admin { Role::Admin } else { Role::Serf };
    let mut new_profile = NewProfile::new(&req.username, password_hash).with_role(role);
    if let Some(ref email) = req.email {
        new_profile = new_profile.with_email(email);
    }
    if let Some(ref bio) = req.bio {
        new_profile = new_profile.with_bio(bio);
    }

    let repo = ProfileRepository::new(state.db.pool());

    // Login resolves usernames COLLATE NOCASE, so registration must reject
    // case variants too, not just byte-identical duplicates
    let taken = repo
        .username_exists(&req.username)
        .await
        .map_err(|_| ApiError::internal("Database error"))?;
    if taken {
        return Err(ApiError::conflict("Username already exists"));
    }

    let profile = repo.create(&new_profile).await.map_err(|e| {
        if e.to_string().contains("UNIQUE") {
            ApiError::conflict("Username already exists")
        } else {
            tracing::error!("Profile creation failed: {}", e);
            ApiError::internal("Failed to create profile")
        }
    })?;

    let access_token =
        state.generate_access_token(profile.id, &profile.username, &profile.role)?;

    let response = AuthResponse {
        access_token,
        expires_in: state.access_token_expiry,
        user: UserInfo {
            id: profile.id,
            username: profile.username,
            role: profile.role.to_string(),
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - Account login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let repo = ProfileRepository::new(state.db.pool());
    let profile = repo
        .get_by_username(&req.username)
        .await
        .map_err(|_| ApiError::unauthorized("Invalid username or password"))?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    crate::verify_password(&req.password, &profile.password)
        .map_err(|_| ApiError::unauthorized("Invalid username or password"))?;

    let access_token =
        state.generate_access_token(profile.id, &profile.username, &profile.role)?;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.access_token_expiry,
        user: UserInfo {
            id: profile.id,
            username: profile.username,
            role: profile.role.to_string(),
        },
    }))
}

/// GET /api/auth/me - Current profile info.
pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let repo = ProfileRepository::new(state.db.pool());
    let profile = repo
        .get_by_id(claims.sub)
        .await
        .map_err(|_| ApiError::internal("Database error"))?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(MeResponse {
        id: profile.id,
        username: profile.username,
        role: profile.role.to_string(),
        email: profile.email,
        bio: profile.bio,
    }))
}
