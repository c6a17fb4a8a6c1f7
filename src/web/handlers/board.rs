//! Content-creation handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::board::{CommentRepository, NewComment, NewPost, PostRepository};
use crate::web::dto::request::{CreateCommentRequest, CreatePostRequest};
use crate::web::dto::response::CreatedResponse;
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::{resolve_profile, AppState};

/// POST /api/posts - Create a post.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let title = req
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Title is required"))?;
    let content = req
        .content
        .ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let author = resolve_profile(&state, &claims).await?;

    let post = PostRepository::new(state.db.pool())
        .create(&NewPost::new(author.id, &title, &content))
        .await?;

    tracing::info!(post_id = post.id, author = %author.username, "post created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Post created".to_string(),
            id: post.id,
        }),
    ))
}

/// POST /api/comments - Create a comment on a post.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let post_id = req
        .post_id
        .ok_or_else(|| ApiError::bad_request("post_id is required"))?;
    let content = req
        .content
        .ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let author = resolve_profile(&state, &claims).await?;

    // A comment on a post that does not exist is a malformed request
    let parent = PostRepository::new(state.db.pool())
        .get_by_id(post_id)
        .await?;
    if parent.is_none() {
        return Err(ApiError::bad_request("No such post"));
    }

    let comment = CommentRepository::new(state.db.pool())
        .create(&NewComment::new(post_id, author.id, &content))
        .await?;

    tracing::info!(
        comment_id = comment.id,
        post_id,
        author = %author.username,
        "comment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Comment created".to_string(),
            id: comment.id,
        }),
    ))
}
