//! Corkboard - a small message-board backend.
//!
//! Posts and comments carry a one-way suppression record; moderators can
//! suppress content they did not author, and suppressed content stays
//! visible to its author and to moderators.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod moderation;
pub mod web;

pub use auth::{hash_password, validate_password, verify_password, PasswordError};
pub use board::{
    Comment, CommentRepository, FeedService, NewComment, NewPost, Post, PostRepository,
};
pub use config::Config;
pub use db::{Database, NewProfile, Profile, ProfileRepository, Role};
pub use error::{CorkboardError, Result};
pub use moderation::{can_view, ModerationService, SuppressionReason, Suppressible};
pub use web::WebServer;
