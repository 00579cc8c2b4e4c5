use log::{debug, info};

use super::expect_data;
use crate::config::VisibilityPolicy;
use crate::constants::DEFAULT_TRANSACTIONS_PAGE_SIZE;
use crate::models::{CheckError, EvmTransactionRequest, PaginationQuery, TransactionResponse};
use crate::services::RelayerApiTrait;
use crate::utils::poll_until;

/// Reads the first page of the relayer's transactions.
pub async fn check_list_transactions<A>(
    api: &A,
    relayer_id: &str,
) -> Result<Vec<TransactionResponse>, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let query = PaginationQuery {
        page: 1,
        per_page: DEFAULT_TRANSACTIONS_PAGE_SIZE,
    };
    expect_data(
        api.list_transactions(relayer_id, query).await?,
        "list transactions",
    )
}

/// Submits `request` and returns the created transaction.
pub async fn check_send_transaction<A>(
    api: &A,
    relayer_id: &str,
    request: EvmTransactionRequest,
) -> Result<TransactionResponse, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    request.validate().map_err(CheckError::InvalidRequest)?;

    let transaction = expect_data(
        api.send_transaction(relayer_id, request).await?,
        "send transaction",
    )?;

    if transaction.id.trim().is_empty() {
        return Err(CheckError::Assertion(
            "send transaction returned an empty transaction id".to_string(),
        ));
    }

    info!(
        "Relayer {} accepted transaction {} ({}, final: {})",
        relayer_id,
        transaction.id,
        transaction.status,
        transaction.status.is_final()
    );
    Ok(transaction)
}

/// Walks the transaction pages until `transaction_id` is found or the
/// listing is exhausted.
async fn transaction_listed<A>(
    api: &A,
    relayer_id: &str,
    transaction_id: &str,
) -> Result<bool, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let mut page = 1;

    loop {
        let query = PaginationQuery {
            page,
            per_page: DEFAULT_TRANSACTIONS_PAGE_SIZE,
        };
        let response = api.list_transactions(relayer_id, query).await?;
        let pagination = response.body.pagination.clone();
        let transactions = expect_data(response, "list transactions")?;

        if transactions.iter().any(|tx| tx.id == transaction_id) {
            return Ok(true);
        }

        let more_pages = match pagination {
            Some(meta) => u64::from(page) * u64::from(meta.per_page.max(1)) < meta.total_items,
            None => false,
        };
        if transactions.is_empty() || !more_pages {
            return Ok(false);
        }

        debug!("Transaction {} not on page {}, reading next page", transaction_id, page);
        page += 1;
    }
}

/// Checks that `transaction_id` shows up in the relayer's transaction list.
///
/// With a single-attempt policy the list is read once. Errors from the list
/// call abort the check instead of being retried.
pub async fn check_transaction_visible<A>(
    api: &A,
    relayer_id: &str,
    transaction_id: &str,
    policy: &VisibilityPolicy,
) -> Result<(), CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let visible = poll_until(
        move || async move { transaction_listed(api, relayer_id, transaction_id).await },
        policy.attempts,
        policy.interval,
        "transaction visibility",
    )
    .await?;

    if !visible {
        return Err(CheckError::Assertion(format!(
            "transaction {} not listed for relayer {} after {} attempt(s)",
            transaction_id,
            relayer_id,
            policy.attempts.max(1)
        )));
    }

    Ok(())
}

/// Sends `request`, then checks the new transaction is listed.
pub async fn check_send_then_list<A>(
    api: &A,
    relayer_id: &str,
    request: EvmTransactionRequest,
    policy: &VisibilityPolicy,
) -> Result<TransactionResponse, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let transaction = check_send_transaction(api, relayer_id, request).await?;
    check_transaction_visible(api, relayer_id, &transaction.id, policy).await?;
    Ok(transaction)
}
