//! Moralis ERC20 transfer client
//!
//! Endpoint: GET /api/v2/{address}/erc20/transfers?chain={chain}
//! Authenticated with the `X-API-Key` header.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::SourceConfig,
    entity::{Network, TokenTransfer},
    error::{ConfigError, SourceError},
};

use super::{get_body, http_client, TransferSource};

const SERVICE: &str = "Moralis";
const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<Vec<Value>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct MoralisClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for MoralisClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoralisClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MoralisClient {
    pub fn new(config: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.moralis_base_url.clone(),
            api_key: config.moralis_api_key.clone(),
        })
    }

    pub fn transfers_url(&self, address: &str) -> String {
        format!("{}/api/v2/{}/erc20/transfers", self.base_url, address)
    }
}

#[async_trait]
impl TransferSource for MoralisClient {
    async fn fetch_transfers(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<TokenTransfer>, SourceError> {
        let url = self.transfers_url(address);
        tracing::debug!(%url, chain = network.moralis_chain, "Fetching token transfers");

        let request = self
            .client
            .get(&url)
            .query(&[("chain", network.moralis_chain)])
            .header(API_KEY_HEADER, &self.api_key);
        let body = get_body(SERVICE, request).await?;

        parse_transfers(&body)
    }
}

/// Decode an `erc20/transfers` response body
///
/// A response without `result` yields no transfers.
pub fn parse_transfers(body: &str) -> Result<Vec<TokenTransfer>, SourceError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| SourceError::Decode {
        service: SERVICE,
        message: e.to_string(),
    })?;

    if let Some(message) = envelope.message.filter(|_| envelope.result.is_none()) {
        tracing::warn!(service = SERVICE, %message, "Response carried no transfers");
    }

    Ok(envelope
        .result
        .unwrap_or_default()
        .into_iter()
        .map(TokenTransfer::from_value)
        .collect())
}
