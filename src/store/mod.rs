//! In-memory store for the forum data snapshot.
//!
//! The snapshot is fetched once at startup from a configured endpoint and is
//! immutable for the lifetime of the process. A failed fetch leaves the store
//! in its empty initial state; views render empty lists rather than errors.

pub mod filter;
pub mod models;

use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

pub use models::{Category, Entity, Forum, Post, Thread, User};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch snapshot from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("snapshot fetch returned status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("failed to decode snapshot body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// The immutable-for-session copy of fetched forum data.
///
/// Each field defaults to an empty collection so a partially shaped payload
/// never fails the whole load. Unrecognized top-level fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub forums: Vec<Forum>,
    #[serde(default)]
    pub threads: Vec<Thread>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Snapshot {
    /// The empty initial state, used when the load fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.forums.is_empty()
            && self.threads.is_empty()
            && self.posts.is_empty()
            && self.users.is_empty()
    }
}

/// Fetch the snapshot from the configured endpoint.
///
/// This is the only network operation the service performs after startup
/// configuration. There is no retry and no partial merge: the caller either
/// gets a complete (possibly partially populated) snapshot or an error.
///
/// # Errors
///
/// Returns an error if the request fails, the response status is not a
/// success, or the body cannot be decoded as a snapshot document.
pub async fn load_snapshot(config: &Config) -> Result<Snapshot, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(config.fetch_timeout)
        .build()
        .map_err(|source| LoadError::Fetch {
            url: config.data_url.clone(),
            source,
        })?;

    let response = client
        .get(&config.data_url)
        .header("User-Agent", "forum-browser/0.1")
        .send()
        .await
        .map_err(|source| LoadError::Fetch {
            url: config.data_url.clone(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(LoadError::Status {
            status: response.status(),
        });
    }

    let snapshot: Snapshot = response
        .json()
        .await
        .map_err(|source| LoadError::Decode { source })?;

    tracing::info!(
        categories = snapshot.categories.len(),
        forums = snapshot.forums.len(),
        threads = snapshot.threads.len(),
        posts = snapshot.posts.len(),
        users = snapshot.users.len(),
        "Snapshot loaded"
    );

    Ok(snapshot)
}
