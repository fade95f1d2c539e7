//! Conversion: MetalPriceResponse → PriceQuote (TryFrom + validation).

use super::wire::MetalPriceResponse;
use super::{PriceQuote, ValidationError};
use crate::shared::time::parse_iso_timestamp;
use crate::shared::MetalSymbol;

impl TryFrom<MetalPriceResponse> for PriceQuote {
    type Error = ValidationError;

    fn try_from(source: MetalPriceResponse) -> Result<Self, Self::Error> {
        let symbol = MetalSymbol::new(&source.symbol);
        if symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }

        if source.unit.trim().is_empty() {
            return Err(ValidationError::MissingUnit {
                symbol: symbol.to_string(),
            });
        }

        if let Some(price) = source.price {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::InvalidPrice {
                    symbol: symbol.to_string(),
                    price,
                });
            }
        }

        let observed_at = match source.timestamp.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_iso_timestamp(raw).ok_or_else(|| {
                ValidationError::InvalidTimestamp {
                    symbol: symbol.to_string(),
                    raw: raw.to_string(),
                }
            })?),
        };

        // Fall back to the catalog name, then the symbol itself.
        let display_name = if source.name.trim().is_empty() {
            symbol
                .display_name()
                .map(str::to_string)
                .unwrap_or_else(|| symbol.to_string())
        } else {
            source.name
        };

        Ok(PriceQuote {
            symbol,
            display_name,
            price: source.price,
            unit: source.unit,
            observed_at,
        })
    }
}
