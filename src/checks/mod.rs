//! # API checks
//!
//! Reusable assertions against a live relayer. Each check performs one or a
//! few API calls through [`RelayerApiTrait`] and validates the response shape.
//! A failed call is returned as [`CheckError::Sdk`] with the original error;
//! a response that does not look right is a [`CheckError::Assertion`].

use reqwest::StatusCode;

use crate::models::{CheckError, EvmTransactionRequest};
use crate::services::SdkResponse;

mod relayer;
pub use relayer::*;

mod transaction;
pub use transaction::*;

mod pause;
pub use pause::*;

mod rpc;
pub use rpc::*;

#[cfg(test)]
pub(crate) mod test_support;

/// Transaction sent by the send checks: 420 wei to a fixed address with
/// `0xbeef` calldata, 21000 gas and 1 gwei EIP-1559 fees.
pub fn default_test_transaction() -> EvmTransactionRequest {
    EvmTransactionRequest::default_test_transaction()
}

/// Unwraps the payload of a call that must answer 200 with `success == true`.
pub(crate) fn expect_data<T>(response: SdkResponse<T>, operation: &str) -> Result<T, CheckError> {
    if response.status != StatusCode::OK {
        return Err(CheckError::Assertion(format!(
            "{} returned status {}, expected 200",
            operation, response.status
        )));
    }

    if !response.body.success {
        return Err(CheckError::Assertion(format!(
            "{} reported success=false: {}",
            operation,
            response.body.error.as_deref().unwrap_or("no error message")
        )));
    }

    response
        .into_data()
        .ok_or_else(|| CheckError::Assertion(format!("{} returned no data", operation)))
}
