//! Defaults for reaching the relayer API.

/// Endpoint used when neither `HOST_PORT` nor `RELAYER_ENDPOINT` is set.
pub const DEFAULT_RELAYER_ENDPOINT: &str = "http://localhost:8080";

/// Prefix shared by every relayer API route.
pub const API_PREFIX: &str = "/api/v1";

/// Number of list-transactions reads performed after a send. One read means
/// the relayer is expected to register the transaction before it responds.
pub const DEFAULT_VISIBILITY_ATTEMPTS: u32 = 1;

/// Delay between list-transactions reads when more than one attempt is allowed.
pub const DEFAULT_VISIBILITY_INTERVAL_MS: u64 = 1000;

/// Page size requested when listing transactions for the visibility check.
pub const DEFAULT_TRANSACTIONS_PAGE_SIZE: u32 = 100;

/// Balance unit reported by EVM relayers.
pub const EVM_BALANCE_UNIT: &str = "wei";
