//! Actions returned by screen event handlers.

use crate::model::RegistrationInput;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to navigate between screens and to kick off
/// the asynchronous submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Send a registration to the server.
    Submit(RegistrationInput),
    /// Quit the application.
    Quit,
}
