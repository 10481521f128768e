//! Submission controller: validate, POST, classify the outcome.
//!
//! Validation always runs first; the network is only touched when the input
//! is clean. Transport and server errors are collapsed into a single generic
//! user-facing message, with the underlying cause logged for diagnostics.

mod client;
mod error;

pub use client::{DEFAULT_ENDPOINT, FORM_TYPE, RegistrationClient};
pub use error::SubmitError;

use crate::model::{RegistrationInput, ValidationErrors, validate};

/// User-facing message for any network or server failure.
pub const SUBMIT_FAILED_MSG: &str = "Failed to submit registration.";

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation rejected the input; no request was made.
    Invalid(ValidationErrors),
    /// The server accepted the registration.
    Succeeded,
    /// The request failed; the message is safe to show to the user.
    Failed(String),
}

/// Page-level submission state. `Succeeded` drives the confirmation modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Succeeded,
    Failed(String),
}

/// Validates `input` and, if clean, POSTs it to the registration endpoint.
pub async fn submit(client: &RegistrationClient, input: &RegistrationInput) -> SubmitOutcome {
    let errors = validate(input);
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }

    match client.post(input).await {
        Ok(()) => SubmitOutcome::Succeeded,
        Err(e) => {
            log::error!("registration submit to {} failed: {e}", client.endpoint());
            SubmitOutcome::Failed(SUBMIT_FAILED_MSG.to_string())
        }
    }
}
