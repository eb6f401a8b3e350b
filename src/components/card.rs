//! List card components for the hierarchy views.
//!
//! Every level of the hierarchy renders the same shape: a card with a
//! heading, a list of navigable links, and a back link. `NavList` is that
//! shared link list; `EmptyState` is its empty placeholder.

use maud::{html, Markup, Render};

/// A single navigable entry in a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Link text
    pub label: String,
    /// Link target
    pub href: String,
}

impl NavItem {
    /// Create a new nav item.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A navigable list of links, one per child entity.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::{NavItem, NavList};
///
/// let list = NavList::new(vec![NavItem::new("General", "/category/1")])
///     .empty_message("No categories yet.");
/// ```
#[derive(Debug, Clone)]
pub struct NavList<'a> {
    pub items: Vec<NavItem>,
    pub empty_message: &'a str,
}

impl<'a> NavList<'a> {
    /// Create a nav list from its items.
    #[must_use]
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            empty_message: "Nothing here yet.",
        }
    }

    /// Set the message shown when the list is empty.
    #[must_use]
    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }
}

impl Render for NavList<'_> {
    fn render(&self) -> Markup {
        if self.items.is_empty() {
            return EmptyState::new(self.empty_message).render();
        }
        html! {
            ul class="nav-list" {
                @for item in &self.items {
                    li {
                        a href=(item.href) class="nav-list-link" { (item.label) }
                    }
                }
            }
        }
    }
}

/// Placeholder shown when a list view has nothing to display.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state with the given message.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_list_renders_links_in_order() {
        let list = NavList::new(vec![
            NavItem::new("General", "/category/1"),
            NavItem::new("Support", "/category/2"),
        ]);
        let html = list.render().into_string();
        let first = html.find("/category/1").unwrap();
        let second = html.find("/category/2").unwrap();
        assert!(first < second);
        assert!(html.contains(r#"<a href="/category/1" class="nav-list-link">General</a>"#));
    }

    #[test]
    fn test_nav_list_empty_state() {
        let list = NavList::new(Vec::new()).empty_message("No forums yet.");
        let html = list.render().into_string();
        assert!(html.contains("No forums yet."));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let list = NavList::new(vec![NavItem::new("<b>bold</b>", "/category/1")]);
        let html = list.render().into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
