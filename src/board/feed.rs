//! Read-side feed assembly.
//!
//! Three presentations of the same board data: a full dump of what the
//! viewer may see with suppression flags exposed, a truncated feed that
//! filters what non-moderators may see, and a single-post detail that
//! redacts suppressed comments in place.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{Profile, ProfileRepository};
use crate::moderation::can_view;
use crate::{CorkboardError, Result};

use super::comment::Comment;
use super::comment_repository::CommentRepository;
use super::post_repository::PostRepository;

/// Placeholder shown where a suppressed comment would appear.
pub const REMOVED_COMMENT_TEXT: &str = "This comment has been removed";

/// Maximum number of content characters carried by feed entries.
pub const FEED_CONTENT_CHARS: usize = 100;

/// Full-dump entry. Visible suppressed items carry their flag.
#[derive(Debug, Serialize)]
pub struct DumpPost {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub suppressed: bool,
    pub comments: Vec<DumpComment>,
}

#[derive(Debug, Serialize)]
pub struct DumpComment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub suppressed: bool,
}

/// Truncated feed entry.
#[derive(Debug, Serialize)]
pub struct FeedEntry {
    pub id: i64,
    pub title: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub status: String,
}

/// Single-post detail with its comment thread.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub status: String,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Serialize)]
pub struct CommentDetail {
    pub id: i64,
    pub username: String,
    pub date: String,
    pub content: String,
    pub status: String,
}

/// Service assembling read-side views of the board.
pub struct FeedService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every post and comment the viewer may see, newest posts first,
    /// suppression flags exposed.
    ///
    /// Items the viewer may not see are omitted entirely, not redacted.
    pub async fn dump(&self, viewer: &Profile) -> Result<Vec<DumpPost>> {
        let posts = PostRepository::new(self.pool).list_recent().await?;
        let comments = CommentRepository::new(self.pool);

        let mut out = Vec::with_capacity(posts.len());
        for post in posts {
            if !can_view(&post, viewer) {
                continue;
            }
            let author = self.username_of(post.author_id).await?;
            let thread = comments.list_by_post(post.id).await?;
            let mut dump_comments = Vec::with_capacity(thread.len());
            for comment in thread {
                if !can_view(&comment, viewer) {
                    continue;
                }
                dump_comments.push(DumpComment {
                    id: comment.id,
                    author: self.username_of(comment.author_id).await?,
                    content: comment.content.clone(),
                    suppressed: comment.is_suppressed,
                });
            }
            out.push(DumpPost {
                id: post.id,
                author,
                content: post.content.clone(),
                suppressed: post.is_suppressed,
                comments: dump_comments,
            });
        }
        Ok(out)
    }

    /// Truncated feed for the given viewer, newest first.
    ///
    /// Moderators see every post; everyone else sees posts that are not
    /// suppressed plus their own suppressed ones. Suppressed entries that
    /// do appear are tagged with status "suppressed".
    pub async fn feed(&self, viewer: &Profile) -> Result<Vec<FeedEntry>> {
        let repo = PostRepository::new(self.pool);
        let posts = if viewer.can_moderate() {
            repo.list_recent().await?
        } else {
            repo.list_visible_to(viewer.id).await?
        };

        let mut out = Vec::with_capacity(posts.len());
        for post in posts {
            let username = self.username_of(post.author_id).await?;
            out.push(FeedEntry {
                id: post.id,
                title: post.title.clone(),
                username,
                date: format_date(&post.created_at),
                content: truncate_content(&post.content),
                status: status_of(post.is_suppressed),
            });
        }
        Ok(out)
    }

    /// Detail view of one post with its full comment thread.
    ///
    /// A suppressed post is only served to its author or a moderator;
    /// anyone else gets a permission error. Suppressed comments the viewer
    /// may not read stay in the thread with their content replaced.
    pub async fn post_detail(&self, post_id: i64, viewer: &Profile) -> Result<PostDetail> {
        let post = PostRepository::new(self.pool)
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))?;

        if !can_view(&post, viewer) {
            return Err(CorkboardError::Permission(
                "this post has been removed".to_string(),
            ));
        }

        let thread = CommentRepository::new(self.pool).list_by_post(post.id).await?;
        let mut comments = Vec::with_capacity(thread.len());
        for comment in thread {
            comments.push(self.render_comment(&comment, viewer).await?);
        }

        let username = self.username_of(post.author_id).await?;
        Ok(PostDetail {
            id: post.id,
            title: post.title.clone(),
            username,
            date: format_date(&post.created_at),
            content: post.content.clone(),
            status: status_of(post.is_suppressed),
            comments,
        })
    }

    async fn render_comment(&self, comment: &Comment, viewer: &Profile) -> Result<CommentDetail> {
        let username = self.username_of(comment.author_id).await?;
        let content = if can_view(comment, viewer) {
            comment.content.clone()
        } else {
            REMOVED_COMMENT_TEXT.to_string()
        };
        Ok(CommentDetail {
            id: comment.id,
            username,
            date: format_date(&comment.created_at),
            content,
            status: status_of(comment.is_suppressed),
        })
    }

    async fn username_of(&self, profile_id: i64) -> Result<String> {
        let profile = ProfileRepository::new(self.pool).get_by_id(profile_id).await?;
        Ok(profile
            .map(|p| p.username)
            .unwrap_or_else(|| "unknown".to_string()))
    }
}

fn status_of(is_suppressed: bool) -> String {
    if is_suppressed { "suppressed" } else { "active" }.to_string()
}

/// Render a stored timestamp as "YYYY-MM-DD HH:MM".
fn format_date(raw: &str) -> String {
    match chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncate to the feed's character limit without splitting a character.
fn truncate_content(content: &str) -> String {
    content.chars().take(FEED_CONTENT_CHARS).collect()
}
