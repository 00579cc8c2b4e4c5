use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TEST_TX_DATA, DEFAULT_TEST_TX_FEE_PER_GAS, DEFAULT_TEST_TX_GAS_LIMIT,
    DEFAULT_TEST_TX_TO, DEFAULT_TEST_TX_VALUE,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fastest,
    Fast,
    Average,
    Slow,
}

/// Body of `POST /relayers/{id}/transactions` for EVM relayers.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct EvmTransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub value: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<Speed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

impl EvmTransactionRequest {
    /// EIP-1559 transfer of 420 wei with `0xbeef` calldata at 1 gwei fees.
    pub fn default_test_transaction() -> Self {
        Self {
            to: Some(DEFAULT_TEST_TX_TO.to_string()),
            value: DEFAULT_TEST_TX_VALUE,
            data: Some(DEFAULT_TEST_TX_DATA.to_string()),
            gas_limit: Some(DEFAULT_TEST_TX_GAS_LIMIT),
            max_fee_per_gas: Some(DEFAULT_TEST_TX_FEE_PER_GAS),
            max_priority_fee_per_gas: Some(DEFAULT_TEST_TX_FEE_PER_GAS),
            ..Default::default()
        }
    }

    /// Rejects requests the relayer would refuse outright.
    pub fn validate(&self) -> Result<(), String> {
        if self.to.is_none() && self.data.is_none() {
            return Err(
                "Both txs `to` and `data` fields are missing. At least one of them has to be set."
                    .to_string(),
            );
        }

        if self.gas_price.is_some()
            && (self.max_fee_per_gas.is_some() || self.max_priority_fee_per_gas.is_some())
        {
            return Err(
                "Cannot mix legacy `gas_price` with EIP-1559 `max_fee_per_gas`/`max_priority_fee_per_gas`"
                    .to_string(),
            );
        }

        if let (Some(max_fee), Some(priority_fee)) =
            (self.max_fee_per_gas, self.max_priority_fee_per_gas)
        {
            if priority_fee > max_fee {
                return Err(
                    "`max_priority_fee_per_gas` cannot exceed `max_fee_per_gas`".to_string(),
                );
            }
        }

        Ok(())
    }
}
