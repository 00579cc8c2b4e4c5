//! Values of the transaction the send checks submit by default.

/// Recipient of the default test transaction.
pub const DEFAULT_TEST_TX_TO: &str = "0xc834dcdc9a074dbbadcc71584789ae4b463db116";

/// Value in wei.
pub const DEFAULT_TEST_TX_VALUE: u128 = 420;

pub const DEFAULT_TEST_TX_DATA: &str = "0xbeef";

/// Gas limit of a plain transfer.
pub const DEFAULT_TEST_TX_GAS_LIMIT: u64 = 21_000;

/// 1 gwei, used for both the fee cap and the priority fee.
pub const DEFAULT_TEST_TX_FEE_PER_GAS: u128 = 1_000_000_000;
