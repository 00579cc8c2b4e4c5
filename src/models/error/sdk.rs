use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single relayer API call.
///
/// Transport, HTTP status and decoding failures are kept apart so callers can
/// tell an unreachable relayer from one that answered with an error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build client: {0}")]
    Client(String),
}

impl SdkError {
    /// HTTP status of the failed call, when the relayer answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
