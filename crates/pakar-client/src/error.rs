//! Error types for pakar-client.

use thiserror::Error;

/// Result type alias for pakar-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Transport error raised by the adapter.
///
/// Controllers catch these at their boundary and convert them into terminal
/// failed view states; raw transport details are logged, never displayed.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    Http {
        /// Status code of the response.
        status: u16,
    },

    /// The backend could not be reached or the connection broke.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not valid JSON or violated the expected schema.
    #[error("malformed response: {0}")]
    Parse(String),

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Classifies a reqwest error into the transport taxonomy.
    ///
    /// Body-decode failures count as parse errors (the response arrived but
    /// did not match the schema); everything else is a network failure.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}
