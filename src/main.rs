//! Runs every API check once against the configured relayer.
//!
//! Reads the same environment as the integration suites (`RELAYER_ID`,
//! `API_KEY`, `HOST_PORT`). Set `RELAYER_SMOKE_PAUSE=true` to include the
//! pause round-trip. Exits with status 1 if any check fails.

use std::env;

use color_eyre::{eyre::WrapErr, Result};
use log::{error, info};

use relayer_sdk_tests::{
    config::RelayerClientConfig,
    logging::setup_logging,
    services::RelayersApi,
    smoke::{run_smoke_checks, SmokeOptions},
};

fn pause_enabled() -> bool {
    env::var("RELAYER_SMOKE_PAUSE")
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = RelayerClientConfig::from_env().wrap_err("Failed to load relayer config")?;
    setup_logging()?;

    println!("Starting API tests...");
    let api = RelayersApi::new(&config).wrap_err("Failed to create relayer client")?;
    info!("Running checks against {} ({:?})", api.base_url(), config);
    let options = SmokeOptions {
        relayer_id: config.relayer_id.clone(),
        visibility: config.visibility,
        include_pause: pause_enabled(),
    };

    let report = run_smoke_checks(&api, &options).await;
    println!("{}", report.summary());

    if !report.is_success() {
        error!("Smoke run failed");
        std::process::exit(1);
    }

    info!("All checks passed");
    Ok(())
}
