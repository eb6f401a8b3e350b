//! List pages for the category, forum, and thread levels.
//!
//! All three levels render the same shape, so a single parameterized list
//! page is instantiated per level with its own heading, link-target builder,
//! and parent-name resolution. A parent id that resolves to nothing (missing
//! or non-numeric) falls back to an "Unknown" placeholder heading and an
//! empty list.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, NavItem, NavList};
use crate::store::{filter, Snapshot};

/// A parameterized list page: heading, navigable children, back link.
struct ListPage<'a> {
    /// Page title (browser tab)
    title: &'a str,
    /// Heading above the list
    heading: &'a str,
    /// Child entries to render
    items: Vec<NavItem>,
    /// Placeholder when there are no children
    empty_message: &'a str,
    /// Whether to render the back link to the categories view
    show_back_link: bool,
}

impl ListPage<'_> {
    fn render(self) -> Markup {
        let content = html! {
            div class="list-card" {
                h1 { (self.heading) }
                (NavList::new(self.items).empty_message(self.empty_message))
                @if self.show_back_link {
                    (Button::outline("Back to Categories").href("/category"))
                }
            }
        };
        BaseLayout::new(self.title).render(content)
    }
}

/// Render the top-level categories view.
#[must_use]
pub fn categories_page(snapshot: &Snapshot) -> Markup {
    let items = snapshot
        .categories
        .iter()
        .map(|category| NavItem::new(category.name.clone(), format!("/category/{}", category.id)))
        .collect();

    ListPage {
        title: "Categories",
        heading: "Forum Categories",
        items,
        empty_message: "No categories yet.",
        show_back_link: false,
    }
    .render()
}

/// Render the forums inside a category.
#[must_use]
pub fn forums_page(raw_category_id: &str, snapshot: &Snapshot) -> Markup {
    let category_name = filter::resolve(&snapshot.categories, raw_category_id)
        .map_or("Unknown Category", |category| category.name.as_str());
    let heading = format!("Forums in Category {category_name}");

    let items = filter::child_forums(raw_category_id, &snapshot.forums)
        .into_iter()
        .map(|forum| NavItem::new(forum.name.clone(), format!("/forum/{}", forum.id)))
        .collect();

    ListPage {
        title: "Forums",
        heading: &heading,
        items,
        empty_message: "No forums in this category.",
        show_back_link: true,
    }
    .render()
}

/// Render the threads inside a forum.
#[must_use]
pub fn threads_page(raw_forum_id: &str, snapshot: &Snapshot) -> Markup {
    let forum_name = filter::resolve(&snapshot.forums, raw_forum_id)
        .map_or("Unknown Forum", |forum| forum.name.as_str());
    let heading = format!("Threads in Forum {forum_name}");

    let items = filter::child_threads(raw_forum_id, &snapshot.threads)
        .into_iter()
        .map(|thread| NavItem::new(thread.title.clone(), format!("/thread/{}", thread.id)))
        .collect();

    ListPage {
        title: "Threads",
        heading: &heading,
        items,
        empty_message: "No threads in this forum.",
        show_back_link: true,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::{Category, Forum, Thread};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            categories: vec![Category {
                id: 1,
                name: "General".to_string(),
            }],
            forums: vec![Forum {
                id: 10,
                name: "Chat".to_string(),
                category_id: 1,
            }],
            threads: vec![Thread {
                id: 100,
                forum_id: 10,
                category_id: 1,
                title: "Hi".to_string(),
                description: "intro".to_string(),
            }],
            ..Snapshot::empty()
        }
    }

    #[test]
    fn test_categories_page_lists_links() {
        let html = categories_page(&sample_snapshot()).into_string();
        assert!(html.contains("Forum Categories"));
        assert!(html.contains(r#"href="/category/1""#));
        assert!(html.contains("General"));
    }

    #[test]
    fn test_categories_page_empty_snapshot() {
        let html = categories_page(&Snapshot::empty()).into_string();
        assert!(html.contains("No categories yet."));
    }

    #[test]
    fn test_forums_page_resolves_heading() {
        let html = forums_page("1", &sample_snapshot()).into_string();
        assert!(html.contains("Forums in Category General"));
        assert!(html.contains(r#"href="/forum/10""#));
        assert!(html.contains("Chat"));
        assert!(html.contains(r#"href="/category""#));
    }

    #[test]
    fn test_forums_page_unknown_category() {
        let html = forums_page("999", &sample_snapshot()).into_string();
        assert!(html.contains("Unknown Category"));
        assert!(html.contains("No forums in this category."));
    }

    #[test]
    fn test_forums_page_non_numeric_id() {
        let html = forums_page("abc", &sample_snapshot()).into_string();
        assert!(html.contains("Unknown Category"));
        assert!(html.contains("No forums in this category."));
    }

    #[test]
    fn test_threads_page() {
        let html = threads_page("10", &sample_snapshot()).into_string();
        assert!(html.contains("Threads in Forum Chat"));
        assert!(html.contains(r#"href="/thread/100""#));
        assert!(html.contains("Hi"));
    }

    #[test]
    fn test_threads_page_unknown_forum() {
        let html = threads_page("77", &sample_snapshot()).into_string();
        assert!(html.contains("Unknown Forum"));
    }
}
