use reqwest::Client as HttpClient;
use super::models::{ApiEnvelope, ApiError, FetchOutcome};
use crate::config::Config;
use tracing::{debug, warn};

const START_BLOCK: &str = "0";
const END_BLOCK: &str = "99999999";

/// Etherscan API client bound to one wallet on one chain
#[derive(Clone)]
pub struct EtherscanClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    chain_id: u64,
    address: String,
}

impl EtherscanClient {
    /// Create a client from the process configuration
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(
            config.etherscan_api_key.clone(),
            config.api_base.clone(),
            config.chain_id,
            config.wallet_address.clone(),
        )
    }

    /// Create a client against a custom endpoint (for testing)
    pub fn with_base_url(api_key: String, base_url: String, chain_id: u64, address: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
            chain_id,
            address,
        }
    }

    /// GET ?module=account&action=tokentx
    ///
    /// Fetches the wallet's ERC-20 transfers, most recent first. Exactly one
    /// request is made; there are no retries.
    ///
    /// # Returns
    /// * `Ok(FetchOutcome)` - Interpreted envelope
    /// * `Err(ApiError)` - Transport failure or malformed response
    pub async fn fetch_token_transfers(&self) -> Result<FetchOutcome, ApiError> {
        let chain_id = self.chain_id.to_string();
        let query = [
            ("chainid", chain_id.as_str()),
            ("module", "account"),
            ("action", "tokentx"),
            ("address", self.address.as_str()),
            ("startblock", START_BLOCK),
            ("endblock", END_BLOCK),
            ("sort", "desc"),
            ("apikey", self.api_key.as_str()),
        ];

        debug!("Requesting token transfers for {} on chain {}", self.address, self.chain_id);

        let response = self.http_client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Etherscan returned HTTP {}: {}", status.as_u16(), body);
            return Err(ApiError::HttpError(status.as_u16(), body));
        }

        let envelope = response
            .json::<ApiEnvelope>()
            .await
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        debug!(
            "Etherscan envelope: status={} message={:?}",
            envelope.status, envelope.message
        );

        envelope.interpret()
    }
}
