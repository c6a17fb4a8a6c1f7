//! Comment model for corkboard.

/// Comment entity attached to a post.
///
/// Carries the same embedded suppression record as a post; comment
/// suppression is independent of the parent post's suppression.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// ID of the parent post (immutable).
    pub post_id: i64,
    /// ID of the profile that created the comment (immutable).
    pub author_id: i64,
    /// Comment body/content.
    pub content: String,
    /// Comment creation timestamp.
    pub created_at: String,
    /// Whether the comment has been suppressed by a moderator.
    pub is_suppressed: bool,
    /// Reason the comment was suppressed.
    pub suppressed_reason_id: Option<i64>,
    /// When the comment was suppressed.
    pub suppressed_at: Option<String>,
    /// Profile ID of the moderator who suppressed the comment.
    pub suppressed_by: Option<i64>,
}

impl Comment {
    /// Check the suppression-record invariant: `is_suppressed` is true iff
    /// the reason, timestamp and actor fields are all set.
    pub fn suppression_record_consistent(&self) -> bool {
        if self.is_suppressed {
            self.suppressed_reason_id.is_some()
                && self.suppressed_at.is_some()
                && self.suppressed_by.is_some()
        } else {
            self.suppressed_reason_id.is_none()
                && self.suppressed_at.is_none()
                && self.suppressed_by.is_none()
        }
    }
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the parent post.
    pub post_id: i64,
    /// ID of the profile creating the comment.
    pub author_id: i64,
    /// Comment body/content.
    pub content: String,
}

impl NewComment {
    /// Create a new comment with required fields.
    pub fn new(post_id: i64, author_id: i64, content: impl Into<String>) -> Self {
        Self {
            post_id,
            author_id,
            content: content.into(),
        }
    }
}
