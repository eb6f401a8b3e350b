//! Landing page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button};

/// Render the landing page: a single entry point into the login gate.
#[must_use]
pub fn home_page() -> Markup {
    let content = html! {
        div class="landing" {
            (Button::primary("Login").href("/login"))
        }
    };
    BaseLayout::new("Home").render(content)
}
