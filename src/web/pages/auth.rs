//! Login page for the web UI.
//!
//! The "Remember me" checkbox and the "Forgot Password?" / "Create Account"
//! links are presentational only; nothing is wired to them.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Button, Checkbox, Form, Input};

/// Render the login page.
///
/// # Arguments
///
/// * `error` - Optional inline message to display above the form
/// * `email` - Previously entered email, redisplayed after a failed attempt
///
/// # Example
///
/// ```ignore
/// // Fresh login page
/// let page = login_page(None, None);
///
/// // After a failed attempt
/// let page = login_page(Some("Invalid email or password"), Some("a@b.com"));
/// ```
#[must_use]
pub fn login_page(error: Option<&str>, email: Option<&str>) -> Markup {
    let content = html! {
        div class="auth-container" {
            h1 { "Welcome Back!" }

            @if let Some(e) = error {
                (Alert::error(e))
            }

            (Form::post("/login", html! {
                div class="form-group" {
                    label for="email" { "Email Address:" }
                    (Input::email("email")
                        .id("email")
                        .placeholder("your@email.com")
                        .value(email.unwrap_or(""))
                        .required())
                }

                div class="form-group" {
                    label for="password" { "Password:" }
                    (Input::password("password")
                        .id("password")
                        .placeholder("Enter your password")
                        .required())
                    a href="#" class="form-link" { "Forgot Password?" }
                }

                div class="form-row" {
                    (Checkbox::new("remember").id("remember").label("Remember me"))
                    a href="#" class="form-link" { "Create Account" }
                }

                (Button::primary("Login").r#type("submit"))
            }))
        }
    };

    BaseLayout::new("Login").render(content)
}
