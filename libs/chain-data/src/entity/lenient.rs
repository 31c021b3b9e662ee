//! Tolerant field decoders for indexing-service payloads
//!
//! The indexing services occasionally return nulls, strings, or floats
//! where numbers are expected. A bad field decodes to `None` instead of
//! failing the whole record.

use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a non-negative integer amount (wei, gas units)
pub fn u256<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(u256_from_value(&value))
}

/// Decode an RFC 3339 timestamp
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

/// Decode a string, ignoring any other JSON type
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

pub fn u256_from_value(value: &Value) -> Option<U256> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => Some(U256::from(v)),
            None => n.as_f64().and_then(u256_from_float),
        },
        Value::String(s) => {
            let s = s.trim();
            U256::from_str_radix(s, 10)
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(u256_from_float))
        }
        _ => None,
    }
}

fn u256_from_float(value: f64) -> Option<U256> {
    if value.is_finite() && value >= 0.0 {
        // float-to-int casts saturate
        Some(U256::from(value.floor() as u128))
    } else {
        None
    }
}
