use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// ERC20 transfer record as returned by the Moralis `erc20/transfers` endpoint
///
/// Scoring only counts these; the fields are kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransfer {
    #[serde(default, deserialize_with = "lenient::string")]
    pub transaction_hash: Option<String>,
    /// Token contract address
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub from_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub to_address: Option<String>,
    /// Raw token amount as a decimal string
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub block_timestamp: Option<String>,
}

impl TokenTransfer {
    /// Decode a single item, falling back to an empty record if it is not an object
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
