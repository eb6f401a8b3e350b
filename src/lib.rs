//! Forum snapshot browser library.
//!
//! A small web service that fetches a single JSON snapshot of forum data
//! (categories, forums, threads, posts, users) at startup and serves an HTML
//! UI for browsing the hierarchy, with a mock login gate in front.

pub mod auth;
pub mod components;
pub mod config;
pub mod store;
pub mod web;
