//! Suppression handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::moderation::ModerationService;
use crate::web::dto::request::SuppressRequest;
use crate::web::dto::response::MessageResponse;
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::{resolve_profile, AppState};

/// POST /api/posts/{id}/suppress - Suppress a post.
pub async fn suppress_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
    Json(req): Json<SuppressRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let actor = resolve_profile(&state, &claims).await?;

    let service = ModerationService::new(state.db.pool(), &state.default_reason_code);
    service
        .suppress_post(post_id, &actor, req.reason.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "Post suppressed".to_string(),
    }))
}

/// POST /api/comments/{id}/suppress - Suppress a comment.
pub async fn suppress_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(comment_id): Path<i64>,
    Json(req): Json<SuppressRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let actor = resolve_profile(&state, &claims).await?;

    let service = ModerationService::new(state.db.pool(), &state.default_reason_code);
    service
        .suppress_comment(comment_id, &actor, req.reason.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "Comment suppressed".to_string(),
    }))
}
