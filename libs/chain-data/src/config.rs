use std::{env, fmt, time::Duration};

use crate::error::ConfigError;

mod defaults {
    pub const COVALENT_BASE_URL: &str = "https://api.covalenthq.com";
    pub const MORALIS_BASE_URL: &str = "https://deep-index.moralis.io";
    pub const HTTP_TIMEOUT_SECS: &str = "30";
}

/// Marker left in keys copied from sample configuration
const PLACEHOLDER_MARKER: &str = "YOUR";

/// Credentials and endpoints for the indexing services
#[derive(Clone)]
pub struct SourceConfig {
    pub covalent_api_key: String,
    pub moralis_api_key: String,
    pub covalent_base_url: String,
    pub moralis_base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("covalent_api_key", &"<redacted>")
            .field("moralis_api_key", &"<redacted>")
            .field("covalent_base_url", &self.covalent_base_url)
            .field("moralis_base_url", &self.moralis_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SourceConfig {
    /// Read configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let covalent_api_key = required_key("COVALENT_API_KEY", &lookup)?;
        let moralis_api_key = required_key("MORALIS_API_KEY", &lookup)?;

        let covalent_base_url = lookup("COVALENT_BASE_URL")
            .unwrap_or_else(|| defaults::COVALENT_BASE_URL.to_string());
        let moralis_base_url = lookup("MORALIS_BASE_URL")
            .unwrap_or_else(|| defaults::MORALIS_BASE_URL.to_string());

        let timeout_raw = lookup("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| defaults::HTTP_TIMEOUT_SECS.to_string());
        let timeout_secs = timeout_raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                var: "HTTP_TIMEOUT_SECS".into(),
                value: timeout_raw.clone(),
            })?;

        Ok(Self {
            covalent_api_key,
            moralis_api_key,
            covalent_base_url: covalent_base_url.trim_end_matches('/').to_string(),
            moralis_base_url: moralis_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn required_key<F>(name: &str, lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;

    if value.contains(PLACEHOLDER_MARKER) {
        return Err(ConfigError::PlaceholderValue(name.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = SourceConfig::from_lookup(lookup_from(&[
            ("COVALENT_API_KEY", "cqt_abc"),
            ("MORALIS_API_KEY", "moralis-key"),
        ]))
        .unwrap();

        assert_eq!(config.covalent_base_url, "https://api.covalenthq.com");
        assert_eq!(config.moralis_base_url, "https://deep-index.moralis.io");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_key_rejected() {
        let err = SourceConfig::from_lookup(lookup_from(&[("COVALENT_API_KEY", "cqt_abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "MORALIS_API_KEY"));

        let err = SourceConfig::from_lookup(lookup_from(&[
            ("COVALENT_API_KEY", "   "),
            ("MORALIS_API_KEY", "moralis-key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "COVALENT_API_KEY"));
    }

    #[test]
    fn test_placeholder_key_rejected() {
        let err = SourceConfig::from_lookup(lookup_from(&[
            ("COVALENT_API_KEY", "YOUR_COVALENT_KEY"),
            ("MORALIS_API_KEY", "moralis-key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderValue(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = SourceConfig::from_lookup(lookup_from(&[
            ("COVALENT_API_KEY", "cqt_abc"),
            ("MORALIS_API_KEY", "moralis-key"),
            ("HTTP_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        // a zero timeout would fail every request immediately
        let err = SourceConfig::from_lookup(lookup_from(&[
            ("COVALENT_API_KEY", "cqt_abc"),
            ("MORALIS_API_KEY", "moralis-key"),
            ("HTTP_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == "0"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = SourceConfig::from_lookup(lookup_from(&[
            ("COVALENT_API_KEY", "cqt_secret"),
            ("MORALIS_API_KEY", "moralis-secret"),
            ("MORALIS_BASE_URL", "http://localhost:9000/"),
        ]))
        .unwrap();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert_eq!(config.moralis_base_url, "http://localhost:9000");
    }
}
