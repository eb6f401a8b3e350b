//! Entity models for the forum snapshot.
//!
//! All five entity types arrive in a single JSON document. Foreign-key style
//! fields (`category_id`, `forum_id`, `thread_id`, `user_id`) are not
//! validated against their target collections; a dangling reference is
//! resolved to an "Unknown" placeholder at render time.

use serde::Deserialize;

/// Root of the hierarchy.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A forum inside a category.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Forum {
    pub id: i64,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
}

/// A thread inside a forum. Carries a denormalized category reference.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Thread {
    pub id: i64,
    #[serde(rename = "forumId")]
    pub forum_id: i64,
    #[serde(rename = "categoryId", default)]
    pub category_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A post inside a thread. `created_at` is kept as the verbatim string the
/// snapshot carries; it is displayed, never parsed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "threadId")]
    pub thread_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub content: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// A user record from the snapshot.
///
/// The snapshot's user shape is known to be inconsistent (`Email`/`pass`
/// alongside `email`/`password`), so both spellings are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "pass")]
    pub password: String,
}

/// An entity with a unique integer identifier.
pub trait Entity {
    fn id(&self) -> i64;
}

impl Entity for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Forum {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Thread {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Post {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }
}
