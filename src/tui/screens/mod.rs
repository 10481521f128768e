//! TUI screen implementations.

pub mod help;
pub mod home;
pub mod registration;

pub use help::{HelpState, draw_help};
pub use home::{HomeState, draw_home};
pub use registration::{RegistrationState, draw_registration};
