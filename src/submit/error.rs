/// Errors from the HTTP submission path.
///
/// Never shown to the user directly; the controller collapses both variants
/// into one generic message and logs the detail.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Transport-level failure (connection refused, DNS, malformed URL, ...).
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}
