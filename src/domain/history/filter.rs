//! User-selected query parameters for prices and history.

use crate::shared::{CurrencyCode, MetalSymbol};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user has selected: metal, date range and quote currency.
///
/// Mutated directly by input handlers; read when the next query is issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub metal: Option<MetalSymbol>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub currency: CurrencyCode,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            metal: Some(MetalSymbol::default()),
            date_from: None,
            date_to: None,
            currency: CurrencyCode::default(),
        }
    }
}

impl Filter {
    pub fn new(metal: impl Into<MetalSymbol>, date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self {
            metal: Some(metal.into()),
            date_from: Some(date_from),
            date_to: Some(date_to),
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<CurrencyCode>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Build a history query, checking every required field is selected.
    pub fn history_query(&self) -> Result<HistoryQuery, FilterError> {
        let metal = self
            .metal
            .clone()
            .filter(|m| !m.is_empty())
            .ok_or(FilterError::MissingMetal)?;
        let date_from = self.date_from.ok_or(FilterError::MissingDateFrom)?;
        let date_to = self.date_to.ok_or(FilterError::MissingDateTo)?;
        Ok(HistoryQuery {
            metal,
            date_from,
            date_to,
        })
    }
}

/// A complete, sendable history request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub metal: MetalSymbol,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    MissingMetal,
    MissingDateFrom,
    MissingDateTo,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::MissingMetal => write!(f, "no metal selected"),
            FilterError::MissingDateFrom => write!(f, "no start date selected"),
            FilterError::MissingDateTo => write!(f, "no end date selected"),
        }
    }
}

impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_complete_filter_builds_query() {
        let filter = Filter::new("silver", date(1), date(10));
        let query = filter.history_query().unwrap();
        assert_eq!(query.metal.as_str(), "SILVER");
        assert_eq!(query.date_from, date(1));
        assert_eq!(query.date_to, date(10));
    }

    #[test]
    fn test_missing_fields() {
        let mut filter = Filter::new("GOLD", date(1), date(10));
        filter.date_to = None;
        assert_eq!(filter.history_query(), Err(FilterError::MissingDateTo));

        filter.date_from = None;
        assert_eq!(filter.history_query(), Err(FilterError::MissingDateFrom));

        filter.metal = Some(MetalSymbol::from(""));
        assert_eq!(filter.history_query(), Err(FilterError::MissingMetal));
    }

    #[test]
    fn test_default_filter() {
        let filter = Filter::default();
        assert_eq!(filter.metal.as_ref().map(|m| m.as_str()), Some("GOLD"));
        assert_eq!(filter.currency.as_str(), "USD");
        assert_eq!(filter.history_query(), Err(FilterError::MissingDateFrom));
    }
}
