//! Shared newtypes and utilities used across all domain modules.
//!
//! The identifier newtypes are serialization-transparent: they serialize and
//! deserialize as the plain strings the backend sends.

pub mod fmt;
pub mod request;
pub mod time;

pub use request::RequestState;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── MetalSymbol ─────────────────────────────────────────────────────────────

/// Newtype for metal identifiers (e.g. `"GOLD"`).
///
/// Always stored uppercase; the backend matches symbols case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetalSymbol(String);

impl MetalSymbol {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display name from the built-in catalog, if the metal is known.
    pub fn display_name(&self) -> Option<&'static str> {
        METALS
            .iter()
            .find(|m| m.symbol == self.0)
            .map(|m| m.display_name)
    }
}

impl Default for MetalSymbol {
    fn default() -> Self {
        Self(GOLD.symbol.to_string())
    }
}

impl std::fmt::Display for MetalSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MetalSymbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MetalSymbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for MetalSymbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MetalSymbol::new(s))
    }
}

impl Serialize for MetalSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MetalSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MetalSymbol::new(s))
    }
}

// ─── CurrencyCode ────────────────────────────────────────────────────────────

/// ISO 4217 currency code used to quote prices (e.g. `"USD"`, `"RUB"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const USD: &'static str = "USD";
    pub const RUB: &'static str = "RUB";

    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    pub fn usd() -> Self {
        Self(Self::USD.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Three ASCII letters.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 3 && self.0.chars().all(|c| c.is_ascii_uppercase())
    }

    /// Whether the backend can quote prices in this currency.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_CURRENCIES.contains(&self.0.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for CurrencyCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::new(s))
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CurrencyCode::new(s))
    }
}

// ─── Metal catalog ───────────────────────────────────────────────────────────

/// A metal the backend tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetalInfo {
    pub symbol: &'static str,
    pub display_name: &'static str,
}

pub const GOLD: MetalInfo = MetalInfo {
    symbol: "GOLD",
    display_name: "Gold",
};
pub const SILVER: MetalInfo = MetalInfo {
    symbol: "SILVER",
    display_name: "Silver",
};
pub const PLATINUM: MetalInfo = MetalInfo {
    symbol: "PLATINUM",
    display_name: "Platinum",
};
pub const PALLADIUM: MetalInfo = MetalInfo {
    symbol: "PALLADIUM",
    display_name: "Palladium",
};

/// Metals offered in the history selector, in display order.
pub const METALS: [MetalInfo; 4] = [GOLD, SILVER, PLATINUM, PALLADIUM];

/// Currencies the backend can convert current prices into.
pub const SUPPORTED_CURRENCIES: [&str; 2] = [CurrencyCode::USD, CurrencyCode::RUB];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metal_symbol_normalizes_case() {
        let symbol = MetalSymbol::from(" gold ");
        assert_eq!(symbol.as_str(), "GOLD");
        assert_eq!(symbol.display_name(), Some("Gold"));
    }

    #[test]
    fn test_metal_symbol_unknown_has_no_display_name() {
        assert!(MetalSymbol::from("copper").display_name().is_none());
    }

    #[test]
    fn test_metal_symbol_serde() {
        let symbol: MetalSymbol = serde_json::from_str("\"silver\"").unwrap();
        assert_eq!(symbol, MetalSymbol::from("SILVER"));
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"SILVER\"");
    }

    #[test]
    fn test_currency_code_supported() {
        assert!(CurrencyCode::from("usd").is_supported());
        assert!(CurrencyCode::from("RUB").is_supported());
        assert!(!CurrencyCode::from("EUR").is_supported());
    }

    #[test]
    fn test_currency_code_well_formed() {
        assert!(CurrencyCode::from("usd").is_well_formed());
        assert!(CurrencyCode::from("RUB").is_well_formed());
        assert!(!CurrencyCode::from("US").is_well_formed());
        assert!(!CurrencyCode::from("U5D").is_well_formed());
    }

    #[test]
    fn test_defaults_match_initial_view() {
        assert_eq!(MetalSymbol::default().as_str(), "GOLD");
        assert_eq!(CurrencyCode::default().as_str(), "USD");
    }
}
