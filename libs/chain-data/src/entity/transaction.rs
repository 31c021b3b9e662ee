use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Transaction record as returned by the Covalent `transactions_v2` endpoint
///
/// Only the fields used for reputation scoring are kept. Every field is
/// optional: a malformed value decodes to `None` and contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tx_hash: Option<String>,
    /// Block finalization time
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub block_signed_at: Option<DateTime<Utc>>,
    /// Gas price in wei
    #[serde(default, deserialize_with = "lenient::u256")]
    pub gas_price: Option<U256>,
    /// Gas units consumed
    #[serde(default, deserialize_with = "lenient::u256")]
    pub gas_spent: Option<U256>,
    /// Recipient; absent for contract creation
    #[serde(default, deserialize_with = "lenient::string")]
    pub to_address: Option<String>,
}

impl Transaction {
    /// Decode a single item, falling back to an empty record if it is not an object
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Wei paid for gas, or `None` when either factor is unknown
    pub fn gas_cost_wei(&self) -> Option<U256> {
        match (self.gas_price, self.gas_spent) {
            (Some(price), Some(used)) => Some(price.saturating_mul(used)),
            _ => None,
        }
    }
}
