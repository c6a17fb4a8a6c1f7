//! Web API handlers.

pub mod auth;
pub mod board;
pub mod feed;
pub mod moderation;

use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::db::{NewProfile, Profile, ProfileRepository, Role};
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Access token expiry in seconds.
    pub access_token_expiry: u64,
    /// Reason code applied when a suppression names none.
    pub default_reason_code: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        db: Arc<Database>,
        jwt_secret: &str,
        access_expiry: u64,
        default_reason_code: impl Into<String>,
    ) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            access_token_expiry: access_expiry,
            default_reason_code: default_reason_code.into(),
        }
    }

    /// Generate an access token for a profile.
    pub fn generate_access_token(
        &self,
        profile_id: i64,
        username: &str,
        role: &Role,
    ) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: profile_id,
            username: username.to_string(),
            role: role.as_str().to_string(),
            iat: now,
            exp: now + self.access_token_expiry,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }
}

/// Resolve the acting profile for a verified token.
///
/// Recreates the row keyed on the token's username if it has gone missing,
/// so a valid token always maps to a usable profile.
pub(crate) async fn resolve_profile(
    state: &AppState,
    claims: &JwtClaims,
) -> Result<Profile, ApiError> {
    let repo = ProfileRepository::new(state.db.pool());
    let role = claims.role.parse::<Role>().unwrap_or_default();
    let placeholder = NewProfile::new(&claims.username, "!").with_role(role);
    let profile = repo.get_or_create(&placeholder).await?;
    Ok(profile)
}
