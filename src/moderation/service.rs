//! Suppression state machine for corkboard.
//!
//! Content moves one way, from visible to suppressed; no unsuppress
//! operation is exposed. Preconditions are checked in a fixed order and
//! each maps to a distinct error.

use sqlx::SqlitePool;
use tracing::info;

use crate::board::{Comment, CommentRepository, Post, PostRepository};
use crate::db::Profile;
use crate::{CorkboardError, Result};

use super::reason_repository::ReasonRepository;

/// Service applying suppression commands against the store.
pub struct ModerationService<'a> {
    pool: &'a SqlitePool,
    default_reason_code: &'a str,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService.
    pub fn new(pool: &'a SqlitePool, default_reason_code: &'a str) -> Self {
        Self {
            pool,
            default_reason_code,
        }
    }

    /// Suppress a post.
    ///
    /// Preconditions, in order: the actor must hold a moderating role, the
    /// post must exist, and the actor must not be the post's author. The
    /// author check applies to moderators too.
    pub async fn suppress_post(
        &self,
        post_id: i64,
        actor: &Profile,
        reason_code: Option<&str>,
    ) -> Result<Post> {
        if !actor.can_moderate() {
            return Err(CorkboardError::Auth("moderator role required".to_string()));
        }

        let posts = PostRepository::new(self.pool);
        let post = posts
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))?;

        if post.author_id == actor.id {
            return Err(CorkboardError::Permission(
                "cannot suppress your own post".to_string(),
            ));
        }

        let reason = self.resolve_reason(reason_code).await?;

        let updated = posts
            .suppress(post.id, reason.id, actor.id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))?;

        info!(
            post_id = updated.id,
            actor = %actor.username,
            reason = %reason.code,
            "post suppressed"
        );
        Ok(updated)
    }

    /// Suppress a comment.
    ///
    /// Same contract as [`suppress_post`](Self::suppress_post); comment
    /// suppression is independent of the parent post's state.
    pub async fn suppress_comment(
        &self,
        comment_id: i64,
        actor: &Profile,
        reason_code: Option<&str>,
    ) -> Result<Comment> {
        if !actor.can_moderate() {
            return Err(CorkboardError::Auth("moderator role required".to_string()));
        }

        let comments = CommentRepository::new(self.pool);
        let comment = comments
            .get_by_id(comment_id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("comment".to_string()))?;

        if comment.author_id == actor.id {
            return Err(CorkboardError::Permission(
                "cannot suppress your own comment".to_string(),
            ));
        }

        let reason = self.resolve_reason(reason_code).await?;

        let updated = comments
            .suppress(comment.id, reason.id, actor.id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("comment".to_string()))?;

        info!(
            comment_id = updated.id,
            actor = %actor.username,
            reason = %reason.code,
            "comment suppressed"
        );
        Ok(updated)
    }

    async fn resolve_reason(
        &self,
        reason_code: Option<&str>,
    ) -> Result<super::reason::SuppressionReason> {
        let code = match reason_code {
            Some(c) if !c.trim().is_empty() => c,
            _ => self.default_reason_code,
        };
        ReasonRepository::new(self.pool).get_or_create(code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{NewComment, NewPost};
    use crate::db::{NewProfile, ProfileRepository, Role};
    use crate::Database;

    struct Fixture {
        db: Database,
        author: Profile,
        moderator: Profile,
        serf: Profile,
    }

    async fn setup() -> Fixture {
        let db = Database::open_in_memory().await.unwrap();
        let profiles = ProfileRepository::new(db.pool());
        let author = profiles
            .create(&NewProfile::new("author", "hash"))
            .await
            .unwrap();
        let moderator = profiles
            .create(&NewProfile::new("mod", "hash").with_role(Role::Admin))
            .await
            .unwrap();
        let serf = profiles
            .create(&NewProfile::new("serf", "hash"))
            .await
            .unwrap();
        Fixture {
            db,
            author,
            moderator,
            serf,
        }
    }

    #[tokio::test]
    async fn test_suppress_post_happy_path() {
        let fx = setup().await;
        let post = PostRepository::new(fx.db.pool())
            .create(&NewPost::new(fx.author.id, "T", "C"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let updated = service
            .suppress_post(post.id, &fx.moderator, Some("spam"))
            .await
            .unwrap();

        assert!(updated.is_suppressed);
        assert_eq!(updated.suppressed_by, Some(fx.moderator.id));
        assert!(updated.suppression_record_consistent());
    }

    #[tokio::test]
    async fn test_resuppress_rewrites_record_and_stays_suppressed() {
        let fx = setup().await;
        let post = PostRepository::new(fx.db.pool())
            .create(&NewPost::new(fx.author.id, "T", "C"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let first = service
            .suppress_post(post.id, &fx.moderator, Some("spam"))
            .await
            .unwrap();
        let second = service
            .suppress_post(post.id, &fx.moderator, Some("abuse"))
            .await
            .unwrap();

        // Still suppressed, record rewritten with the new reason, and
        // still internally consistent
        assert!(second.is_suppressed);
        assert_ne!(second.suppressed_reason_id, first.suppressed_reason_id);
        assert_eq!(second.suppressed_by, Some(fx.moderator.id));
        assert!(second.suppression_record_consistent());

        let stored = PostRepository::new(fx.db.pool())
            .get_by_id(post.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_suppressed);
        assert_eq!(stored.suppressed_reason_id, second.suppressed_reason_id);
    }

    #[tokio::test]
    async fn test_suppress_requires_moderator() {
        let fx = setup().await;
        let post = PostRepository::new(fx.db.pool())
            .create(&NewPost::new(fx.author.id, "T", "C"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let err = service
            .suppress_post(post.id, &fx.serf, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CorkboardError::Auth(_)));

        // Precondition order: role is checked before existence
        let err = service
            .suppress_post(999, &fx.serf, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CorkboardError::Auth(_)));
    }

    #[tokio::test]
    async fn test_suppress_missing_post_is_not_found() {
        let fx = setup().await;
        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let err = service
            .suppress_post(999, &fx.moderator, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CorkboardError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_self_suppression_forbidden_even_for_moderators() {
        let fx = setup().await;
        let post = PostRepository::new(fx.db.pool())
            .create(&NewPost::new(fx.moderator.id, "Mine", "body"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let err = service
            .suppress_post(post.id, &fx.moderator, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CorkboardError::Permission(_)));

        // Nothing was written
        let post = PostRepository::new(fx.db.pool())
            .get_by_id(post.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!post.is_suppressed);
        assert!(post.suppression_record_consistent());
    }

    #[tokio::test]
    async fn test_missing_reason_uses_default_code() {
        let fx = setup().await;
        let post = PostRepository::new(fx.db.pool())
            .create(&NewPost::new(fx.author.id, "T", "C"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let updated = service
            .suppress_post(post.id, &fx.moderator, None)
            .await
            .unwrap();

        let code: String = sqlx::query_scalar(
            "SELECT code FROM suppression_reasons WHERE id = ?",
        )
        .bind(updated.suppressed_reason_id.unwrap())
        .fetch_one(fx.db.pool())
        .await
        .unwrap();
        assert_eq!(code, "default_reason");
    }

    #[tokio::test]
    async fn test_reason_shared_between_post_and_comment() {
        let fx = setup().await;
        let posts = PostRepository::new(fx.db.pool());
        let comments = CommentRepository::new(fx.db.pool());

        let post = posts
            .create(&NewPost::new(fx.author.id, "T", "C"))
            .await
            .unwrap();
        let other_post = posts
            .create(&NewPost::new(fx.serf.id, "T2", "C2"))
            .await
            .unwrap();
        let comment = comments
            .create(&NewComment::new(post.id, fx.serf.id, "hey"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let p = service
            .suppress_post(other_post.id, &fx.moderator, Some("spam"))
            .await
            .unwrap();
        let c = service
            .suppress_comment(comment.id, &fx.moderator, Some("spam"))
            .await
            .unwrap();

        // Exactly one catalog row for the code, referenced by both
        assert_eq!(p.suppressed_reason_id, c.suppressed_reason_id);
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM suppression_reasons WHERE code = 'spam'")
                .fetch_one(fx.db.pool())
                .await
                .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_suppress_comment_self_forbidden() {
        let fx = setup().await;
        let post = PostRepository::new(fx.db.pool())
            .create(&NewPost::new(fx.author.id, "T", "C"))
            .await
            .unwrap();
        let comment = CommentRepository::new(fx.db.pool())
            .create(&NewComment::new(post.id, fx.moderator.id, "mine"))
            .await
            .unwrap();

        let service = ModerationService::new(fx.db.pool(), "default_reason");
        let err = service
            .suppress_comment(comment.id, &fx.moderator, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CorkboardError::Permission(_)));
    }
}
