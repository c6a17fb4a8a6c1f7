//! Read-side handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::{DumpPost, FeedEntry, FeedService, PostDetail};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::{resolve_profile, AppState};

/// GET /api/feed/dump - Everything the viewer may see, flags exposed.
pub async fn dump(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<DumpPost>>, ApiError> {
    let viewer = resolve_profile(&state, &claims).await?;
    let dump = FeedService::new(state.db.pool()).dump(&viewer).await?;
    Ok(Json(dump))
}

/// GET /api/feed - Truncated feed filtered for the viewer.
pub async fn feed(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<FeedEntry>>, ApiError> {
    let viewer = resolve_profile(&state, &claims).await?;
    let entries = FeedService::new(state.db.pool()).feed(&viewer).await?;
    Ok(Json(entries))
}

/// GET /api/posts/{id} - One post with its comment thread.
pub async fn post_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Json<PostDetail>, ApiError> {
    let viewer = resolve_profile(&state, &claims).await?;
    let detail = FeedService::new(state.db.pool())
        .post_detail(post_id, &viewer)
        .await?;
    Ok(Json(detail))
}
