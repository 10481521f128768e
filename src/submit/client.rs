use serde::Serialize;

use crate::model::RegistrationInput;

use super::error::SubmitError;

/// Default registration endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/register";

/// Discriminator identifying this form variant to the shared backend.
pub const FORM_TYPE: &str = "french";

/// JSON body POSTed to the registration endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationPayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    gender: &'a str,
    current_city: &'a str,
    form_type: &'static str,
}

pub(crate) fn payload(input: &RegistrationInput) -> RegistrationPayload<'_> {
    RegistrationPayload {
        name: &input.name,
        email: &input.email,
        phone: &input.phone,
        // The controller validates before posting; an unset gender can only
        // appear if `post` is called directly and serializes as empty.
        gender: input.gender.map(|g| g.as_str()).unwrap_or_default(),
        current_city: &input.current_city,
        form_type: FORM_TYPE,
    }
}

/// HTTP client for the registration endpoint.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Creates a client posting to the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs the registration as JSON. Any 2xx status is success; the
    /// response body is ignored.
    pub async fn post(&self, input: &RegistrationInput) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload(input))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}

impl Default for RegistrationClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
