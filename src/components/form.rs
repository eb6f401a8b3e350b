//! Form components for maud templates.
//!
//! Reusable form building blocks matching the styles in
//! `static/css/style.css`.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// Create a new form with the given action and method.
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type ("text", "password", "email", etc.)
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Whether the field is required
    pub required: bool,
    /// Optional ID attribute
    pub id: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create a new input of the given type.
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            placeholder: None,
            required: false,
            id: None,
        }
    }

    /// Create an email input.
    #[must_use]
    pub fn email(name: &'a str) -> Self {
        Self::new(name, "email")
    }

    /// Create a password input.
    #[must_use]
    pub fn password(name: &'a str) -> Self {
        Self::new(name, "password")
    }

    /// Set the current value.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the ID attribute.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                id=[self.id]
                required[self.required];
        }
    }
}

/// A labeled checkbox element.
#[derive(Debug, Clone)]
pub struct Checkbox<'a> {
    /// Checkbox name attribute
    pub name: &'a str,
    /// Label text shown next to the checkbox
    pub label: Option<&'a str>,
    /// Optional ID attribute
    pub id: Option<&'a str>,
}

impl<'a> Checkbox<'a> {
    /// Create a new checkbox.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            label: None,
            id: None,
        }
    }

    /// Set the label text.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the ID attribute.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Checkbox<'_> {
    fn render(&self) -> Markup {
        html! {
            @if let Some(label) = self.label {
                label class="checkbox-label" {
                    input type="checkbox" name=(self.name) id=[self.id];
                    " " (label)
                }
            } @else {
                input type="checkbox" name=(self.name) id=[self.id];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_form() {
        let form = Form::post("/login", html! { p { "fields" } });
        let html = form.render().into_string();
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains("<p>fields</p>"));
    }

    #[test]
    fn test_email_input() {
        let input = Input::email("email")
            .id("email")
            .placeholder("your@email.com")
            .required();
        let html = input.render().into_string();
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"placeholder="your@email.com""#));
        assert!(html.contains("required"));
    }

    #[test]
    fn test_password_input_no_value_attr_by_default() {
        let html = Input::password("password").render().into_string();
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_checkbox_with_label() {
        let html = Checkbox::new("remember")
            .id("remember")
            .label("Remember me")
            .render()
            .into_string();
        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains(r#"name="remember""#));
        assert!(html.contains("Remember me"));
    }
}
