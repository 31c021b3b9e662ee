use chain_data::{ConfigError, SourceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing `{0}` environment variable")]
    MissingEnvVar(String),

    #[error("Invalid ChainID: `{0}`")]
    InvalidChainID(String),

    #[error("Invalid wallet address: `{0}`")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Could not fetch wallet data: {0}")]
    InputUnavailable(#[from] SourceError),
}
