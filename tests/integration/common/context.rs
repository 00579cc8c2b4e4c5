//! Shared setup for the integration suites.

use eyre::{Result, WrapErr};
use relayer_sdk_tests::{config::RelayerClientConfig, services::RelayersApi};

use super::logging::init_test_logging;

/// Client and configuration for the relayer under test.
#[derive(Debug)]
pub struct TestContext {
    pub api: RelayersApi,
    pub config: RelayerClientConfig,
}

impl TestContext {
    /// Builds the context from `RELAYER_ID`, `API_KEY` and `HOST_PORT`.
    pub fn from_env() -> Result<Self> {
        init_test_logging();

        let config = RelayerClientConfig::from_env()
            .wrap_err("RELAYER_ID and API_KEY must be set for integration tests")?;
        let api = RelayersApi::new(&config).wrap_err("Failed to create relayer client")?;

        Ok(Self { api, config })
    }

    pub fn relayer_id(&self) -> &str {
        &self.config.relayer_id
    }
}
