//! Typed client and checks for the relayer HTTP API.
//!
//! The [`services::RelayersApi`] client covers the relayer, transaction, rpc
//! and health endpoints. [`checks`] holds the assertions shared by the smoke
//! binary and the integration suites, and [`services::decrypt_keystore`] reads
//! the local signer keystore.

pub mod checks;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod smoke;
pub mod utils;
