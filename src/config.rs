//! Runtime configuration from environment variables.
//!
//! | Variable                  | Default                 |
//! |---------------------------|-------------------------|
//! | `METALS_API_BASE_URL`     | `http://localhost:5000` |
//! | `METALS_API_TIMEOUT_SECS` | `30`                    |
//! | `METALS_DEFAULT_CURRENCY` | `USD`                   |

use crate::error::SdkError;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::shared::CurrencyCode;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "METALS_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "METALS_API_TIMEOUT_SECS";
pub const ENV_DEFAULT_CURRENCY: &str = "METALS_DEFAULT_CURRENCY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub default_currency: CurrencyCode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_currency: CurrencyCode::default(),
        }
    }
}

impl Config {
    /// Read the process environment. Unset or blank variables keep defaults.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SdkError::Config(format!("{} must be a whole number, got {:?}", ENV_TIMEOUT_SECS, raw))
            })?;
            if secs == 0 {
                return Err(SdkError::Config(format!("{} must be positive", ENV_TIMEOUT_SECS)));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get(ENV_DEFAULT_CURRENCY) {
            let currency = CurrencyCode::new(&raw);
            if !currency.is_well_formed() {
                return Err(SdkError::Config(format!(
                    "{} must be a three-letter code, got {:?}",
                    ENV_DEFAULT_CURRENCY, raw
                )));
            }
            config.default_currency = currency;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_BASE_URL, "https://metals.example.com"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_DEFAULT_CURRENCY, "rub"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://metals.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.default_currency.as_str(), "RUB");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(err, Err(SdkError::Config(_))));
        let err = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")]));
        assert!(matches!(err, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_invalid_currency() {
        let err = Config::from_lookup(lookup(&[(ENV_DEFAULT_CURRENCY, "dollars")]));
        assert!(matches!(err, Err(SdkError::Config(_))));
    }
}
