//! Relayer endpoint tests: health, listing, details, balance, status and pause.

use crate::integration::common::context::TestContext;
use relayer_sdk_tests::checks::{
    check_get_relayer, check_health, check_list_relayers, check_pause_round_trip,
    check_relayer_balance, check_relayer_status,
};
use relayer_sdk_tests::models::PaginationQuery;
use relayer_sdk_tests::services::RelayerApiTrait;
use reqwest::StatusCode;
use serial_test::serial;
use tracing::{info, info_span};

const RELAYER_PAGE_SIZE: u32 = 100;

#[tokio::test]
#[serial]
async fn test_health_endpoint() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_health_endpoint").entered();

    check_health(&ctx.api).await.expect("Health check failed");
    info!("Health endpoint answered ok");
}

#[tokio::test]
#[serial]
async fn test_list_relayers() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_list_relayers").entered();

    let relayers = check_list_relayers(&ctx.api)
        .await
        .expect("List relayers check failed");
    info!(count = relayers.len(), "Listed relayers on first page");

    let mut page = 1;
    let listed = loop {
        let response = ctx
            .api
            .list_relayers(PaginationQuery {
                page,
                per_page: RELAYER_PAGE_SIZE,
            })
            .await
            .expect("List relayers failed");
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.success);

        let total_items = response
            .body
            .pagination
            .as_ref()
            .map(|meta| meta.total_items)
            .unwrap_or(0);
        let relayers = response.body.data.unwrap_or_default();
        if relayers.iter().any(|r| r.id == ctx.relayer_id()) {
            break true;
        }
        if relayers.is_empty() || u64::from(page) * u64::from(RELAYER_PAGE_SIZE) >= total_items {
            break false;
        }
        page += 1;
    };

    assert!(
        listed,
        "Configured relayer {} should be listed",
        ctx.relayer_id()
    );
}

#[tokio::test]
#[serial]
async fn test_get_relayer() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_get_relayer", relayer = %ctx.relayer_id()).entered();

    let relayer = check_get_relayer(&ctx.api, ctx.relayer_id())
        .await
        .expect("Get relayer check failed");
    info!(name = %relayer.name, network = %relayer.network, "Fetched relayer");
}

#[tokio::test]
#[serial]
async fn test_get_unknown_relayer_is_not_found() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let missing = format!("missing-{}", uuid::Uuid::new_v4().simple());

    let err = ctx
        .api
        .get_relayer(&missing)
        .await
        .expect_err("Unknown relayer should not resolve");
    assert!(err.is_not_found(), "Expected 404, got {}", err);
}

#[tokio::test]
#[serial]
async fn test_relayer_balance() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_relayer_balance", relayer = %ctx.relayer_id()).entered();

    let balance = check_relayer_balance(&ctx.api, ctx.relayer_id(), true)
        .await
        .expect("Balance check failed");
    info!(balance = %balance.balance, unit = %balance.unit, "Relayer balance");
}

#[tokio::test]
#[serial]
async fn test_relayer_status() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_relayer_status", relayer = %ctx.relayer_id()).entered();

    let status = check_relayer_status(&ctx.api, ctx.relayer_id())
        .await
        .expect("Status check failed");
    info!(paused = status.paused(), network_type = %status.network_type(), "Relayer status");
}

#[tokio::test]
#[serial]
async fn test_pause_and_unpause_relayer() {
    let ctx = TestContext::from_env().expect("Failed to setup test");
    let _span = info_span!("test_pause_and_unpause_relayer", relayer = %ctx.relayer_id()).entered();

    let before = check_relayer_status(&ctx.api, ctx.relayer_id())
        .await
        .expect("Status check failed");

    check_pause_round_trip(&ctx.api, ctx.relayer_id())
        .await
        .expect("Pause round trip failed");

    let after = check_relayer_status(&ctx.api, ctx.relayer_id())
        .await
        .expect("Status check failed");
    assert_eq!(
        after.paused(),
        before.paused(),
        "Round trip should leave the paused flag as it found it"
    );
}
