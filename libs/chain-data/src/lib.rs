pub mod config;
pub mod entity;
pub mod error;
pub mod sources;

// Re-export commonly used types
pub use config::SourceConfig;
pub use entity::{
    address::{is_hex_address, short_address},
    Network, TokenTransfer, Transaction,
};
pub use error::{ConfigError, SourceError};
pub use sources::{
    CovalentClient, IndexerSources, MoralisClient, TransactionSource, TransferSource,
};

/// Load source configuration from the environment and build both indexing clients.
///
/// Fails before any request is made when a required API key is missing.
pub fn initialize_sources() -> Result<IndexerSources, ConfigError> {
    let config = SourceConfig::from_env()?;

    IndexerSources::new(&config)
}
