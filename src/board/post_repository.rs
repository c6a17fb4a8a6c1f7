//! Post repository for corkboard.
//!
//! This module provides CRUD and suppression operations for posts.

use sqlx::SqlitePool;

use super::post::{NewPost, Post};
use crate::{CorkboardError, Result};

const POST_COLUMNS: &str = "id, author_id, title, content, created_at, \
     is_suppressed, suppressed_reason_id, suppressed_at, suppressed_by";

/// Repository for post operations.
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new post.
    ///
    /// Returns the created post with the assigned ID.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let result = sqlx::query("INSERT INTO posts (author_id, title, content) VALUES (?, ?, ?)")
            .bind(new_post.author_id)
            .bind(&new_post.title)
            .bind(&new_post.content)
            .execute(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let result = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all posts, newest first.
    pub async fn list_recent(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// List posts visible to a non-moderator viewer, newest first.
    ///
    /// A non-moderator sees every post that is not suppressed, plus their
    /// own suppressed posts.
    pub async fn list_visible_to(&self, viewer_id: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE is_suppressed = 0 OR author_id = ?
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(viewer_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// Mark a post as suppressed.
    ///
    /// All four suppression fields are written by a single statement, so
    /// the record is never partially set. Returns the updated post, or
    /// None if not found.
    pub async fn suppress(
        &self,
        id: i64,
        reason_id: i64,
        actor_id: i64,
    ) -> Result<Option<Post>> {
        let result = sqlx::query(
            "UPDATE posts
             SET is_suppressed = 1,
                 suppressed_reason_id = ?,
                 suppressed_at = datetime('now'),
                 suppressed_by = ?
             WHERE id = ?",
        )
        .bind(reason_id)
        .bind(actor_id)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}
