//! JSON-RPC passthrough tests.

use crate::integration::common::context::TestContext;
use relayer_sdk_tests::checks::check_rpc_passthrough;
use relayer_sdk_tests::models::JsonRpcRequest;
use serde_json::json;
use serial_test::serial;
use tracing::{info, info_span};

#[tokio::test]
#[serial]
async fn test_rpc_chain_id() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_rpc_chain_id", relayer = %ctx.relayer_id()).entered();

    let response = check_rpc_passthrough(
        &ctx.api,
        ctx.relayer_id(),
        JsonRpcRequest::new(1, "eth_chainId", json!([])),
    )
    .await
    .expect("RPC passthrough failed");

    let chain_id = response.result.expect("eth_chainId should return a result");
    assert!(
        chain_id.as_str().is_some_and(|id| id.starts_with("0x")),
        "Unexpected chain id {}",
        chain_id
    );
    info!(chain_id = %chain_id, "Chain id");
}

#[tokio::test]
#[serial]
async fn test_rpc_block_number() {
    let ctx = TestContext::from_env().expect("Failed to setup test");

    let response = check_rpc_passthrough(
        &ctx.api,
        ctx.relayer_id(),
        JsonRpcRequest::new("block-number", "eth_blockNumber", json!([])),
    )
    .await
    .expect("RPC passthrough failed");

    assert!(response.error.is_none(), "Unexpected error {:?}", response.error);
}
