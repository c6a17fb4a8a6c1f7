//! Post model for corkboard.

/// Post entity representing a top-level message.
///
/// The four suppression fields form one embedded record: either all are
/// unset (`is_suppressed == false`) or all are set.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// ID of the profile that created the post (immutable).
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Post body/content.
    pub content: String,
    /// Post creation timestamp.
    pub created_at: String,
    /// Whether the post has been suppressed by a moderator.
    pub is_suppressed: bool,
    /// Reason the post was suppressed.
    pub suppressed_reason_id: Option<i64>,
    /// When the post was suppressed.
    pub suppressed_at: Option<String>,
    /// Profile ID of the moderator who suppressed the post.
    pub suppressed_by: Option<i64>,
}

impl Post {
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

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// ID of the profile creating the post.
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Post body/content.
    pub content: String,
}

impl NewPost {
    /// Create a new post with required fields.
    pub fn new(author_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author_id,
            title: title.into(),
            content: content.into(),
        }
    }
}
