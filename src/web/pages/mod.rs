//! Maud page templates for the web UI.
//!
//! Each page re-derives its data from the snapshot via the hierarchy
//! filters; nothing is cached between navigations.

mod auth;
mod home;
mod listing;
mod posts;

pub use auth::login_page;
pub use home::home_page;
pub use listing::{categories_page, forums_page, threads_page};
pub use posts::posts_page;
