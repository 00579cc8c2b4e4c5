use log::{info, warn};

use super::{check_relayer_status, expect_data};
use crate::models::{CheckError, RelayerUpdateRequest};
use crate::services::RelayerApiTrait;

async fn set_paused<A>(api: &A, relayer_id: &str, paused: bool) -> Result<bool, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let operation = if paused { "pause relayer" } else { "unpause relayer" };
    let relayer = expect_data(
        api.update_relayer(relayer_id, RelayerUpdateRequest::paused(paused))
            .await?,
        operation,
    )?;
    Ok(relayer.paused)
}

/// Pauses the relayer, then sets `paused` back to the value its status
/// reported before the check. Each update must be reflected in its own
/// response.
///
/// Once the pause has gone through, any later failure triggers one attempt to
/// restore the prior state before the failure is returned.
pub async fn check_pause_round_trip<A>(api: &A, relayer_id: &str) -> Result<(), CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let was_paused = check_relayer_status(api, relayer_id).await?.paused();
    if was_paused {
        warn!("Relayer {} is already paused, it will stay paused", relayer_id);
    }

    let paused = set_paused(api, relayer_id, true).await?;

    let result: Result<(), CheckError> = async {
        if !paused {
            return Err(CheckError::Assertion(format!(
                "relayer {} still reports paused=false after pausing",
                relayer_id
            )));
        }

        let restored = set_paused(api, relayer_id, was_paused).await?;
        if restored != was_paused {
            return Err(CheckError::Assertion(format!(
                "relayer {} reports paused={} after restoring paused={}",
                relayer_id, restored, was_paused
            )));
        }

        Ok(())
    }
    .await;

    match result {
        Ok(()) => {
            info!(
                "Relayer {} paused and restored to paused={}",
                relayer_id, was_paused
            );
            Ok(())
        }
        Err(err) => {
            match set_paused(api, relayer_id, was_paused).await {
                Ok(state) if state == was_paused => info!(
                    "Relayer {} restored to paused={} after failed pause check",
                    relayer_id, was_paused
                ),
                Ok(state) => warn!(
                    "Relayer {} reports paused={} after restore attempt",
                    relayer_id, state
                ),
                Err(restore_err) => warn!(
                    "Failed to restore relayer {} after failed pause check: {}",
                    relayer_id, restore_err
                ),
            }
            Err(err)
        }
    }
}
