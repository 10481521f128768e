//! Reusable TUI widgets.

pub mod form;
pub mod modal;

pub use form::{Form, FormField, draw_form};
pub use modal::{CONFIRMATION_MESSAGE, draw_modal};
