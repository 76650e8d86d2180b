use std::future::Future;
use num_bigint::BigUint;
use tracing::{info, warn};
use crate::api::etherscan::{AmountError, ApiError, EtherscanClient, FetchOutcome, TransferRecord};

/// Maximum number of transfers shown per reply
pub const RECENT_LIMIT: usize = 5;

/// Characters of the sender address kept in a reply line
const SENDER_PREFIX_LEN: usize = 8;

pub const FETCHING_MESSAGE: &str = "Fetching recent token transactions...";
pub const NO_TRANSACTIONS_REPLY: &str = "No transactions found.";

/// Fetch the wallet's transfers, logging the outcome
pub async fn fetch_transactions(client: &EtherscanClient) -> Result<FetchOutcome, ApiError> {
    let result = client.fetch_token_transfers().await;

    match &result {
        Ok(FetchOutcome::Success(records)) => info!("Fetched {} token transfers", records.len()),
        Ok(FetchOutcome::EmptySuccess) => info!("Etherscan reports no transactions"),
        Ok(FetchOutcome::Failure(message)) => warn!("Etherscan returned an error: {}", message),
        Err(e) => warn!("Failed to fetch token transfers: {}", e),
    }

    result
}

/// Send the acknowledgement, then run `fetch` and send the rendered result.
///
/// `fetch` is not polled until the acknowledgement has been sent; if that
/// send fails no request is made.
pub async fn acknowledge_and_reply<F, S, Fut, E>(fetch: F, mut send: S) -> Result<(), E>
where
    F: Future<Output = Result<FetchOutcome, ApiError>>,
    S: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    send(FETCHING_MESSAGE.to_string()).await?;
    let reply = render_reply(fetch.await);
    send(reply).await
}

/// Turn a fetch result into reply text
pub fn render_reply(result: Result<FetchOutcome, ApiError>) -> String {
    match result {
        Ok(FetchOutcome::Success(records)) if !records.is_empty() => {
            format_recent(&records).unwrap_or_else(|e| error_reply(&e.to_string()))
        }
        Ok(FetchOutcome::Success(_)) | Ok(FetchOutcome::EmptySuccess) => {
            NO_TRANSACTIONS_REPLY.to_string()
        }
        Ok(FetchOutcome::Failure(message)) => error_reply(&message),
        Err(e) => error_reply(&e.to_string()),
    }
}

fn error_reply(message: &str) -> String {
    format!("Error fetching transactions: {}", message)
}

/// Render the first `RECENT_LIMIT` records, keeping the fetch order.
/// Records past the limit are never parsed.
pub fn format_recent(records: &[TransferRecord]) -> Result<String, AmountError> {
    let lines = records
        .iter()
        .take(RECENT_LIMIT)
        .map(format_record)
        .collect::<Result<Vec<String>, AmountError>>()?;

    Ok(format!("Recent transactions:\n{}", lines.join("\n")))
}

/// `<symbol>: <quantity> from <sender prefix>... (block <n>)`
pub fn format_record(record: &TransferRecord) -> Result<String, AmountError> {
    let quantity = format_quantity(&record.raw_value()?, record.decimal_count()?);
    let sender: String = record.from.chars().take(SENDER_PREFIX_LEN).collect();

    Ok(format!(
        "{}: {} from {}... (block {})",
        record.token_symbol, quantity, sender, record.block_number
    ))
}

/// Whole-token quantity: `raw / 10^decimals`, fraction truncated
pub fn format_quantity(raw: &BigUint, decimals: u32) -> String {
    let scale = BigUint::from(10u32).pow(decimals);
    (raw / scale).to_string()
}
