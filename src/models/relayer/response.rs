//! Response models for relayer API endpoints.
//!
//! These mirror the JSON the relayer returns for relayer details, runtime
//! status and balance. Fields the checks never read are kept as opaque JSON
//! so that policy changes on the service side do not break decoding.

use super::{RelayerNetworkType, RpcConfig};
use serde::{Deserialize, Serialize};

/// Relayer response model for API endpoints
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RelayerResponse {
    pub id: String,
    pub name: String,
    pub network: String,
    pub network_type: RelayerNetworkType,
    pub paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<serde_json::Value>,
    pub signer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rpc_urls: Option<Vec<RpcConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disabled: Option<bool>,
}

/// Relayer status with runtime information
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "network_type")]
pub enum RelayerStatus {
    #[serde(rename = "evm")]
    Evm {
        balance: String,
        pending_transactions_count: u64,
        last_confirmed_transaction_timestamp: Option<String>,
        system_disabled: bool,
        paused: bool,
        nonce: String,
    },
    #[serde(rename = "stellar")]
    Stellar {
        balance: String,
        pending_transactions_count: u64,
        last_confirmed_transaction_timestamp: Option<String>,
        system_disabled: bool,
        paused: bool,
        sequence_number: String,
    },
    #[serde(rename = "solana")]
    Solana {
        balance: String,
        pending_transactions_count: u64,
        last_confirmed_transaction_timestamp: Option<String>,
        system_disabled: bool,
        paused: bool,
    },
}

impl RelayerStatus {
    pub fn paused(&self) -> bool {
        match self {
            RelayerStatus::Evm { paused, .. }
            | RelayerStatus::Stellar { paused, .. }
            | RelayerStatus::Solana { paused, .. } => *paused,
        }
    }

    pub fn system_disabled(&self) -> bool {
        match self {
            RelayerStatus::Evm {
                system_disabled, ..
            }
            | RelayerStatus::Stellar {
                system_disabled, ..
            }
            | RelayerStatus::Solana {
                system_disabled, ..
            } => *system_disabled,
        }
    }

    pub fn balance(&self) -> &str {
        match self {
            RelayerStatus::Evm { balance, .. }
            | RelayerStatus::Stellar { balance, .. }
            | RelayerStatus::Solana { balance, .. } => balance,
        }
    }

    pub fn network_type(&self) -> RelayerNetworkType {
        match self {
            RelayerStatus::Evm { .. } => RelayerNetworkType::Evm,
            RelayerStatus::Stellar { .. } => RelayerNetworkType::Stellar,
            RelayerStatus::Solana { .. } => RelayerNetworkType::Solana,
        }
    }
}

/// Balance of the relayer's signer in the network's smallest unit.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BalanceResponse {
    pub balance: u128,
    pub unit: String,
}
