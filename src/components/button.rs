//! Button component for the web UI.
//!
//! Renders as either a `<button>` or `<a>` element based on whether an href
//! is provided.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary button (default) - `.btn-primary`
    #[default]
    Primary,
    /// Outline button - `.btn.outline`
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn outline",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let submit = Button::primary("Login").r#type("submit");
/// let link = Button::outline("Back to Categories").href("/category");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Button label text
    pub label: &'a str,
    /// Button style variant
    pub variant: ButtonVariant,
    /// Optional href (renders as `<a>` if present)
    pub href: Option<&'a str>,
    /// Button type attribute (for `<button>` elements)
    pub r#type: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Creates a new button with the given label and variant.
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            r#type: None,
        }
    }

    /// Creates a primary button.
    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    /// Creates an outline button.
    #[must_use]
    pub fn outline(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Outline)
    }

    /// Sets the href, rendering the button as a link.
    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Sets the button type attribute.
    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.class();
        match self.href {
            Some(href) => html! {
                a href=(href) class=(class) { (self.label) }
            },
            None => html! {
                button class=(class) type=[self.r#type] { (self.label) }
            },
        }
    }
}
