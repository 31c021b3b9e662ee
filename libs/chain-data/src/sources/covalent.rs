//! Covalent transaction history client
//!
//! Endpoint: GET /v1/{chain}/address/{address}/transactions_v2/?key={key}

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::SourceConfig,
    entity::{Network, Transaction},
    error::{ConfigError, SourceError},
};

use super::{get_body, http_client, TransactionSource};

const SERVICE: &str = "Covalent";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Data>,
    #[serde(default)]
    error: Option<bool>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

#[derive(Clone)]
pub struct CovalentClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for CovalentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CovalentClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CovalentClient {
    pub fn new(config: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.covalent_base_url.clone(),
            api_key: config.covalent_api_key.clone(),
        })
    }

    /// Endpoint for a wallet's transactions, without credentials
    pub fn transactions_url(&self, network: &Network, address: &str) -> String {
        format!(
            "{}/v1/{}/address/{}/transactions_v2/",
            self.base_url, network.covalent_chain, address
        )
    }
}

#[async_trait]
impl TransactionSource for CovalentClient {
    async fn fetch_transactions(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<Transaction>, SourceError> {
        let url = self.transactions_url(network, address);
        tracing::debug!(%url, "Fetching transactions");

        let request = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())]);
        let body = get_body(SERVICE, request).await?;

        parse_transactions(&body)
    }
}

/// Decode a `transactions_v2` response body
///
/// A response without `data.items` yields an empty history.
pub fn parse_transactions(body: &str) -> Result<Vec<Transaction>, SourceError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| SourceError::Decode {
        service: SERVICE,
        message: e.to_string(),
    })?;

    if envelope.error.unwrap_or(false) {
        return Err(SourceError::Api {
            service: SERVICE,
            message: envelope
                .error_message
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let items = envelope.data.and_then(|d| d.items).unwrap_or_default();

    Ok(items.into_iter().map(Transaction::from_value).collect())
}
