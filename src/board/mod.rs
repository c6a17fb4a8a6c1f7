//! Board content: posts, threaded comments, and feed assembly.

mod comment;
mod comment_repository;
mod feed;
mod post;
mod post_repository;

pub use comment::{Comment, NewComment};
pub use comment_repository::CommentRepository;
pub use feed::{
    CommentDetail, DumpComment, DumpPost, FeedEntry, FeedService, PostDetail,
    FEED_CONTENT_CHARS, REMOVED_COMMENT_TEXT,
};
pub use post::{NewPost, Post};
pub use post_repository::PostRepository;
