//! Relayer models as exposed by the relayer API.
//!
//! - **Responses**: relayer details, runtime status and balance
//! - **Requests**: partial updates such as pausing a relayer

mod request;
pub use request::*;

mod response;
pub use response::*;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Network type enum for relayers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RelayerNetworkType {
    Evm,
    Solana,
    Stellar,
}

/// Custom RPC endpoint configured on a relayer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcConfig {
    pub url: String,
    #[serde(default)]
    pub weight: Option<u8>,
}
