//! Visibility predicate for suppressed content.
//!
//! Whether a viewer may see an item is a pure function of the item's
//! suppression flag and authorship and the viewer's identity and role.

use crate::board::{Comment, Post};
use crate::db::Profile;

/// Content that carries a suppression flag and an author.
pub trait Suppressible {
    /// Whether the item has been suppressed.
    fn is_suppressed(&self) -> bool;
    /// Profile ID of the item's author.
    fn author_id(&self) -> i64;
}

impl Suppressible for Post {
    fn is_suppressed(&self) -> bool {
        self.is_suppressed
    }

    fn author_id(&self) -> i64 {
        self.author_id
    }
}

impl Suppressible for Comment {
    fn is_suppressed(&self) -> bool {
        self.is_suppressed
    }

    fn author_id(&self) -> i64 {
        self.author_id
    }
}

/// Decide whether `viewer` may see `item`.
///
/// Non-suppressed items are visible to everyone. Suppressed items remain
/// visible to moderators and to their own author; everyone else is denied.
/// Applied independently per item: a visible post may carry hidden
/// comments and vice versa.
pub fn can_view<T: Suppressible>(item: &T, viewer: &Profile) -> bool {
    if !item.is_suppressed() {
        return true;
    }
    if viewer.can_moderate() {
        return true;
    }
    item.author_id() == viewer.id
}
