//! Posts view: the leaf level of the hierarchy.
//!
//! Unlike the list levels this page shows the owning thread's description
//! and, per post, the authoring user's raw identifier and the creation
//! timestamp verbatim. User ids are not joined to the user list.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, EmptyState};
use crate::store::{filter, Snapshot};

/// Render the posts inside a thread.
#[must_use]
pub fn posts_page(raw_thread_id: &str, snapshot: &Snapshot) -> Markup {
    let thread = filter::resolve(&snapshot.threads, raw_thread_id);
    let thread_title = thread.map_or("Unknown Thread", |t| t.title.as_str());
    let description = thread
        .map(|t| t.description.as_str())
        .filter(|d| !d.is_empty())
        .unwrap_or("No Description");

    let posts = filter::child_posts(raw_thread_id, &snapshot.posts);

    let content = html! {
        div class="list-card" {
            h1 { "Posts in Thread " (thread_title) }
            h2 class="thread-description" { "Description: " (description) }

            @if posts.is_empty() {
                (EmptyState::new("No posts in this thread."))
            } @else {
                ul class="post-list" {
                    @for post in &posts {
                        li class="post" {
                            p class="post-author" { b { "User: " (post.user_id) } }
                            p class="post-content" {
                                (post.content)
                                " "
                                small { "(" (post.created_at) ")" }
                            }
                        }
                    }
                }
            }

            (Button::outline("Back to Categories").href("/category"))
        }
    };

    BaseLayout::new("Posts").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::{Post, Thread};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            threads: vec![Thread {
                id: 100,
                forum_id: 10,
                category_id: 1,
                title: "Hi".to_string(),
                description: "intro".to_string(),
            }],
            posts: vec![Post {
                id: 1000,
                thread_id: 100,
                user_id: 1,
                content: "hello".to_string(),
                created_at: "2024-01-01".to_string(),
            }],
            ..Snapshot::empty()
        }
    }

    #[test]
    fn test_posts_page_heading_and_description() {
        let html = posts_page("100", &sample_snapshot()).into_string();
        assert!(html.contains("Posts in Thread Hi"));
        assert!(html.contains("Description: intro"));
    }

    #[test]
    fn test_posts_page_post_fields() {
        let html = posts_page("100", &sample_snapshot()).into_string();
        assert!(html.contains("User: 1"));
        assert!(html.contains("hello"));
        assert!(html.contains("(2024-01-01)"));
    }

    #[test]
    fn test_posts_page_unknown_thread() {
        let html = posts_page("999", &sample_snapshot()).into_string();
        assert!(html.contains("Unknown Thread"));
        assert!(html.contains("No Description"));
        assert!(html.contains("No posts in this thread."));
    }

    #[test]
    fn test_posts_page_empty_description_falls_back() {
        let mut snapshot = sample_snapshot();
        snapshot.threads[0].description = String::new();
        let html = posts_page("100", &snapshot).into_string();
        assert!(html.contains("No Description"));
    }

    #[test]
    fn test_posts_page_back_link() {
        let html = posts_page("100", &sample_snapshot()).into_string();
        assert!(html.contains(r#"href="/category""#));
    }
}
