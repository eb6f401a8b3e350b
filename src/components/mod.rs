//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `form`: Form, input, and checkbox components
//! - `button`: Configurable button and link-button component
//! - `alert`: Inline alert messages
//! - `card`: Navigable link lists and empty states

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

// Re-export layout components
pub use layout::BaseLayout;

// Re-export form components
pub use form::{Checkbox, Form, Input};

// Re-export button components
pub use button::{Button, ButtonVariant};

// Re-export alert components
pub use alert::{Alert, AlertVariant};

// Re-export card components
pub use card::{EmptyState, NavItem, NavList};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
