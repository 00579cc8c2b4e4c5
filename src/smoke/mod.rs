//! Smoke run of every check against one relayer.
//!
//! Checks run one after another in a fixed order. A failing check is recorded
//! and the run moves on, so the summary always covers the whole list.

use log::{error, info};

use crate::checks::{
    check_get_relayer, check_health, check_list_relayers, check_list_transactions,
    check_pause_round_trip, check_relayer_balance, check_relayer_status, check_send_then_list,
    default_test_transaction,
};
use crate::config::VisibilityPolicy;
use crate::models::CheckError;
use crate::services::RelayerApiTrait;

/// Result of one named check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: Result<(), CheckError>,
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SmokeReport {
    fn record<T>(&mut self, name: &'static str, result: Result<T, CheckError>) {
        let result = result.map(|_| ());
        match &result {
            Ok(()) => info!("PASS {}", name),
            Err(e) => error!("FAIL {}: {}", name, e),
        }
        self.outcomes.push(CheckOutcome { name, result });
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// One line per failed check followed by the totals.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self
            .failures()
            .filter_map(|o| {
                o.result
                    .as_ref()
                    .err()
                    .map(|e| format!("FAIL {}: {}", o.name, e))
            })
            .collect();
        lines.push(format!(
            "{} passed, {} failed, {} total",
            self.passed(),
            self.outcomes.len() - self.passed(),
            self.outcomes.len()
        ));
        lines.join("\n")
    }
}

/// Settings for a smoke run.
#[derive(Debug, Clone)]
pub struct SmokeOptions {
    pub relayer_id: String,
    pub visibility: VisibilityPolicy,
    /// Also run the pause round-trip, which briefly pauses the relayer.
    pub include_pause: bool,
}

pub async fn run_smoke_checks<A>(api: &A, options: &SmokeOptions) -> SmokeReport
where
    A: RelayerApiTrait + ?Sized,
{
    let relayer_id = options.relayer_id.as_str();
    let mut report = SmokeReport::default();

    report.record("health", check_health(api).await);
    report.record("list relayers", check_list_relayers(api).await);
    report.record("get relayer", check_get_relayer(api, relayer_id).await);
    report.record(
        "relayer balance",
        check_relayer_balance(api, relayer_id, true).await,
    );
    report.record("relayer status", check_relayer_status(api, relayer_id).await);
    report.record(
        "list transactions",
        check_list_transactions(api, relayer_id).await,
    );
    report.record(
        "send transaction and list",
        check_send_then_list(
            api,
            relayer_id,
            default_test_transaction(),
            &options.visibility,
        )
        .await,
    );

    if options.include_pause {
        report.record(
            "pause round trip",
            check_pause_round_trip(api, relayer_id).await,
        );
    }

    report
}
