//! Moderation: the visibility rule, the reason catalog, and suppression.

mod reason;
mod reason_repository;
mod service;
mod visibility;

pub use reason::SuppressionReason;
pub use reason_repository::ReasonRepository;
pub use service::ModerationService;
pub use visibility::{can_view, Suppressible};
