//! Clients for the external indexing services
//!
//! - Covalent: wallet transaction history
//! - Moralis: ERC20 token transfers

pub mod covalent;
pub mod moralis;

#[cfg(test)]
mod stub_server;

use async_trait::async_trait;

use crate::{
    config::SourceConfig,
    entity::{Network, TokenTransfer, Transaction},
    error::{ConfigError, SourceError},
};

pub use covalent::CovalentClient;
pub use moralis::MoralisClient;

/// Provider of a wallet's transaction history
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<Transaction>, SourceError>;
}

/// Provider of a wallet's token transfers
#[async_trait]
pub trait TransferSource: Send + Sync {
    async fn fetch_transfers(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<TokenTransfer>, SourceError>;
}

/// Both production clients built from one configuration
#[derive(Debug, Clone)]
pub struct IndexerSources {
    pub transactions: CovalentClient,
    pub transfers: MoralisClient,
}

impl IndexerSources {
    pub fn new(config: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            transactions: CovalentClient::new(config)?,
            transfers: MoralisClient::new(config)?,
        })
    }
}

/// Build the shared HTTP client for a service
fn http_client(config: &SourceConfig) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

/// Send a GET request and return the body of a successful response
async fn get_body(
    service: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<String, SourceError> {
    // without_url keeps query-string credentials out of error messages
    let response = request.send().await.map_err(|e| SourceError::Request {
        service,
        message: e.without_url().to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus {
            service,
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| SourceError::Request {
        service,
        message: e.without_url().to_string(),
    })
}
