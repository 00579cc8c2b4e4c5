use log::{info, warn};

use super::expect_data;
use crate::constants::EVM_BALANCE_UNIT;
use crate::models::{
    BalanceResponse, CheckError, PaginationQuery, RelayerResponse, RelayerStatus,
};
use crate::services::RelayerApiTrait;

/// Lists relayers; an empty list is accepted.
pub async fn check_list_relayers<A>(api: &A) -> Result<Vec<RelayerResponse>, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let relayers = expect_data(
        api.list_relayers(PaginationQuery::default()).await?,
        "list relayers",
    )?;
    info!("Listed {} relayer(s)", relayers.len());
    Ok(relayers)
}

/// Fetches one relayer and checks that the returned id matches.
pub async fn check_get_relayer<A>(api: &A, relayer_id: &str) -> Result<RelayerResponse, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let relayer = expect_data(api.get_relayer(relayer_id).await?, "get relayer")?;

    if relayer.id != relayer_id {
        return Err(CheckError::Assertion(format!(
            "get relayer returned id {}, expected {}",
            relayer.id, relayer_id
        )));
    }

    Ok(relayer)
}

/// Reads the relayer balance. With `require_funded` the balance must be a
/// positive amount of wei.
pub async fn check_relayer_balance<A>(
    api: &A,
    relayer_id: &str,
    require_funded: bool,
) -> Result<BalanceResponse, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let balance = expect_data(
        api.get_relayer_balance(relayer_id).await?,
        "get relayer balance",
    )?;

    if balance.unit.trim().is_empty() {
        return Err(CheckError::Assertion(
            "get relayer balance returned an empty unit".to_string(),
        ));
    }

    if require_funded {
        if balance.unit != EVM_BALANCE_UNIT {
            return Err(CheckError::Assertion(format!(
                "relayer balance unit is {}, expected {}",
                balance.unit, EVM_BALANCE_UNIT
            )));
        }
        if balance.balance == 0 {
            return Err(CheckError::Assertion(format!(
                "relayer {} is not funded",
                relayer_id
            )));
        }
    }

    info!("Relayer {} balance: {} {}", relayer_id, balance.balance, balance.unit);
    Ok(balance)
}

/// Reads the runtime status so callers can inspect `paused`.
pub async fn check_relayer_status<A>(api: &A, relayer_id: &str) -> Result<RelayerStatus, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let status = expect_data(
        api.get_relayer_status(relayer_id).await?,
        "get relayer status",
    )?;

    if status.system_disabled() {
        warn!("Relayer {} is disabled by the service", relayer_id);
    }
    info!(
        "Relayer {} status: paused={}, balance={}",
        relayer_id,
        status.paused(),
        status.balance()
    );
    Ok(status)
}

pub async fn check_health<A>(api: &A) -> Result<(), CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let health = api.health().await?;

    if !health.is_ok() {
        return Err(CheckError::Assertion(format!(
            "health endpoint answered {:?}, expected \"ok\"",
            health.status
        )));
    }

    Ok(())
}
