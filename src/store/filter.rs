//! Pure hierarchy filters over snapshot collections.
//!
//! Identifiers arrive as path-derived strings. They are coerced to the
//! collection's integer id type before comparison; a non-numeric identifier
//! yields an empty result rather than an error. Results preserve input order
//! and nothing is cached: each navigation re-scans the snapshot, which is
//! fine at this dataset size.

use super::models::{Entity, Forum, Post, Thread};

/// Parse a path-derived identifier. Non-numeric input is `None`.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// All items whose parent key matches the given raw identifier, in input
/// order. An unparseable identifier matches nothing.
pub fn children_of<'a, T>(
    items: &'a [T],
    raw_parent_id: &str,
    parent_key: impl Fn(&T) -> i64,
) -> Vec<&'a T> {
    let Some(parent_id) = parse_id(raw_parent_id) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| parent_key(item) == parent_id)
        .collect()
}

/// Forums belonging to a category.
#[must_use]
pub fn child_forums<'a>(raw_category_id: &str, forums: &'a [Forum]) -> Vec<&'a Forum> {
    children_of(forums, raw_category_id, |forum| forum.category_id)
}

/// Threads belonging to a forum.
#[must_use]
pub fn child_threads<'a>(raw_forum_id: &str, threads: &'a [Thread]) -> Vec<&'a Thread> {
    children_of(threads, raw_forum_id, |thread| thread.forum_id)
}

/// Posts belonging to a thread.
#[must_use]
pub fn child_posts<'a>(raw_thread_id: &str, posts: &'a [Post]) -> Vec<&'a Post> {
    children_of(posts, raw_thread_id, |post| post.thread_id)
}

/// The entity with the given raw identifier, if present.
///
/// Ids are assumed unique within a collection; the first match wins.
pub fn resolve<'a, T: Entity>(items: &'a [T], raw_id: &str) -> Option<&'a T> {
    let id = parse_id(raw_id)?;
    items.iter().find(|item| item.id() == id)
}
