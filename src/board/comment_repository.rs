//! Comment repository for corkboard.

use sqlx::SqlitePool;

use super::comment::{Comment, NewComment};
use crate::{CorkboardError, Result};

const COMMENT_COLUMNS: &str = "id, post_id, author_id, content, created_at, \
     is_suppressed, suppressed_reason_id, suppressed_at, suppressed_by";

/// Repository for comment operations.
pub struct CommentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new comment.
    ///
    /// Returns the created comment with the assigned ID.
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        let result =
            sqlx::query("INSERT INTO comments (post_id, author_id, content) VALUES (?, ?, ?)")
                .bind(new_comment.post_id)
                .bind(new_comment.author_id)
                .bind(&new_comment.content)
                .execute(self.pool)
                .await
                .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("comment".to_string()))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let result = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List comments on a post, oldest first.
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE post_id = ? ORDER BY created_at ASC, id ASC"
        ))
        .bind(post_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(comments)
    }

    /// Mark a comment as suppressed.
    ///
    /// All four suppression fields are written by a single statement.
    /// Returns the updated comment, or None if not found.
    pub async fn suppress(
        &self,
        id: i64,
        reason_id: i64,
        actor_id: i64,
    ) -> Result<Option<Comment>> {
        let result = sqlx::query(
            "UPDATE comments
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{NewPost, PostRepository};
    use crate::db::{NewProfile, ProfileRepository};
    use crate::moderation::ReasonRepository;
    use crate::Database;

    async fn setup() -> (Database, i64, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let author = ProfileRepository::new(db.pool())
            .create(&NewProfile::new("author", "hash"))
            .await
            .unwrap();
        let post = PostRepository::new(db.pool())
            .create(&NewPost::new(author.id, "Post", "body"))
            .await
            .unwrap();
        (db, author.id, post.id)
    }

    #[tokio::test]
    async fn test_create_and_get_comment() {
        let (db, author_id, post_id) = setup().await;
        let repo = CommentRepository::new(db.pool());

        let comment = repo
            .create(&NewComment::new(post_id, author_id, "First!"))
            .await
            .unwrap();
        assert_eq!(comment.post_id, post_id);
        assert!(!comment.is_suppressed);

        let fetched = repo.get_by_id(comment.id).await.unwrap().unwrap();
        assert_eq!(fetched.content, "First!");
    }

    #[tokio::test]
    async fn test_list_by_post_orders_oldest_first() {
        let (db, author_id, post_id) = setup().await;
        let repo = CommentRepository::new(db.pool());

        let a = repo
            .create(&NewComment::new(post_id, author_id, "one"))
            .await
            .unwrap();
        let b = repo
            .create(&NewComment::new(post_id, author_id, "two"))
            .await
            .unwrap();

        let comments = repo.list_by_post(post_id).await.unwrap();
        let ids: Vec<i64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_suppress_comment_sets_whole_record() {
        let (db, author_id, post_id) = setup().await;
        let repo = CommentRepository::new(db.pool());
        let profiles = ProfileRepository::new(db.pool());
        let reasons = ReasonRepository::new(db.pool());

        let moderator = profiles
            .create(&NewProfile::new("mod", "hash"))
            .await
            .unwrap();
        let reason = reasons.get_or_create("abuse").await.unwrap();
        let comment = repo
            .create(&NewComment::new(post_id, author_id, "rude"))
            .await
            .unwrap();

        let suppressed = repo
            .suppress(comment.id, reason.id, moderator.id)
            .await
            .unwrap()
            .unwrap();
        assert!(suppressed.is_suppressed);
        assert!(suppressed.suppression_record_consistent());
    }

    #[tokio::test]
    async fn test_suppress_missing_comment() {
        let (db, _, _) = setup().await;
        let repo = CommentRepository::new(db.pool());
        assert!(repo.suppress(999, 1, 1).await.unwrap().is_none());
    }
}
