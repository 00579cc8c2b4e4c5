//! # Services Module
//!
//! Clients for the relayer HTTP API and the local keystore.

mod relayer_api;
pub use relayer_api::*;

mod keystore;
pub use keystore::*;
