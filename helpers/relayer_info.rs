//! Fetches the configured relayer and its balance and prints both as JSON.
//!
//! Uses `RELAYER_ID`, `API_KEY` and `HOST_PORT` like the smoke run.
//!
//! ```bash
//! cargo run --example relayer_info
//! ```

use eyre::{Result, WrapErr};
use relayer_sdk_tests::{
    config::RelayerClientConfig,
    services::{RelayerApiTrait, RelayersApi},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RelayerClientConfig::from_env()?;
    let api = RelayersApi::new(&config)?;

    let relayer = api
        .get_relayer(&config.relayer_id)
        .await
        .wrap_err("Failed to fetch relayer")?;
    println!("Relayer: {}", serde_json::to_string_pretty(&relayer.body)?);

    let balance = api
        .get_relayer_balance(&config.relayer_id)
        .await
        .wrap_err("Failed to fetch relayer balance")?;
    println!("Balance: {}", serde_json::to_string_pretty(&balance.body)?);

    Ok(())
}
