//! Transaction submission and listing tests.

use crate::integration::common::context::TestContext;
use relayer_sdk_tests::checks::{
    check_list_transactions, check_send_then_list, check_send_transaction,
    check_transaction_visible, default_test_transaction,
};
use relayer_sdk_tests::services::RelayerApiTrait;
use serial_test::serial;
use tracing::{info, info_span};

#[tokio::test]
#[serial]
async fn test_list_transactions() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_list_transactions", relayer = %ctx.relayer_id()).entered();

    let transactions = check_list_transactions(&ctx.api, ctx.relayer_id())
        .await
        .expect("List transactions check failed");
    info!(count = transactions.len(), "Listed transactions");
}

#[tokio::test]
#[serial]
async fn test_send_transaction_is_listed() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_send_transaction_is_listed", relayer = %ctx.relayer_id()).entered();

    let transaction = check_send_then_list(
        &ctx.api,
        ctx.relayer_id(),
        default_test_transaction(),
        &ctx.config.visibility,
    )
    .await
    .expect("Send then list check failed");
    info!(id = %transaction.id, status = %transaction.status, "Transaction listed");
}

#[tokio::test]
#[serial]
async fn test_get_sent_transaction() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_get_sent_transaction", relayer = %ctx.relayer_id()).entered();

    let sent = check_send_transaction(&ctx.api, ctx.relayer_id(), default_test_transaction())
        .await
        .expect("Send transaction check failed");

    let fetched = ctx
        .api
        .get_transaction(ctx.relayer_id(), &sent.id)
        .await
        .expect("Get transaction failed")
        .into_data()
        .expect("Get transaction returned no data");
    assert_eq!(fetched.id, sent.id);

    check_transaction_visible(&ctx.api, ctx.relayer_id(), &sent.id, &ctx.config.visibility)
        .await
        .expect("Transaction should be listed");
}
