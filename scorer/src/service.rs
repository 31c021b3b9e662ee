use chain_data::{is_hex_address, short_address, Network, TransactionSource, TransferSource};
use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    scoring::{ReputationScore, ReputationScorer},
};

/// Parse an optional `CHAIN_ID` value; blank counts as unset
pub fn parse_chain_id(raw: Option<&str>) -> Result<Option<u64>, AppError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| AppError::InvalidChainID(value.to_string())),
        None => Ok(None),
    }
}

/// Fetch a wallet's history from both indexing services and score it
///
/// The address is validated before any request is made. If either fetch
/// fails the score is not calculated.
pub async fn score_wallet<T, R>(
    transaction_source: &T,
    transfer_source: &R,
    network: &Network,
    address: &str,
    now: DateTime<Utc>,
) -> Result<ReputationScore, AppError>
where
    T: TransactionSource + ?Sized,
    R: TransferSource + ?Sized,
{
    if !is_hex_address(address) {
        return Err(AppError::InvalidAddress(address.to_string()));
    }

    let wallet = short_address(address);
    tracing::info!(%wallet, network = network.name, "Calculating reputation score");

    let (transactions, transfers) = tokio::try_join!(
        transaction_source.fetch_transactions(network, address),
        transfer_source.fetch_transfers(network, address),
    )
    .inspect_err(|error| {
        tracing::error!(%wallet, service = error.service(), "Error fetching data: {error}")
    })?;

    tracing::debug!(
        %wallet,
        transactions = transactions.len(),
        transfers = transfers.len(),
        "Fetched wallet history"
    );

    let score = ReputationScorer::calculate(&transactions, &transfers, now);

    tracing::info!(
        %wallet,
        total = score.total,
        badge = %score.badge,
        "Reputation score calculated"
    );

    Ok(score)
}
