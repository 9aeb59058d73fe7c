//! RTT client error types.

/// Errors from the RealTime Trains HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RttError {
    /// HTTP request failed (network error, timeout) after retries.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code.
    #[error("RTT API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed.
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Run date was not in `YYYY-MM-DD` form.
    #[error("invalid run date: {0}")]
    InvalidRunDate(String),

    /// Credentials could not be used to build the client.
    #[error("invalid RTT credentials")]
    InvalidCredentials,
}
