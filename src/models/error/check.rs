use super::SdkError;
use thiserror::Error;

/// Outcome of a failed API check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The call itself failed; the original error is preserved.
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// The relayer answered, but not with what the check expects.
    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CheckError {
    pub fn is_assertion(&self) -> bool {
        matches!(self, CheckError::Assertion(_))
    }
}
