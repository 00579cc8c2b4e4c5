//! Integration test modules

mod keystore;
mod relayer_api;
mod rpc;
mod transactions;
