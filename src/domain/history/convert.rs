//! Conversion: HistoricalPriceResponse → HistoricalPoint.

use super::wire::HistoricalPriceResponse;
use super::{HistoricalPoint, ValidationError};
use crate::shared::time::parse_iso_timestamp;

impl TryFrom<HistoricalPriceResponse> for HistoricalPoint {
    type Error = ValidationError;

    fn try_from(source: HistoricalPriceResponse) -> Result<Self, Self::Error> {
        if !source.price.is_finite() {
            return Err(ValidationError::InvalidPrice(source.price));
        }
        let observed_at = parse_iso_timestamp(&source.timestamp)
            .ok_or(ValidationError::InvalidTimestamp(source.timestamp))?;
        Ok(HistoricalPoint {
            price: source.price,
            observed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::LineData;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_point_conversion() {
        let resp = HistoricalPriceResponse {
            price: 2034.5,
            timestamp: "2024-03-01T00:00:00".to_string(),
        };
        let point = HistoricalPoint::try_from(resp).unwrap();
        assert_eq!(point.price, 2034.5);
        assert_eq!(
            point.observed_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );

        let line: LineData = point.into();
        assert_eq!(line.time, 1_709_251_200_000);
        assert_eq!(line.value, 2034.5);
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let resp = HistoricalPriceResponse {
            price: 1.0,
            timestamp: "n/a".to_string(),
        };
        assert_eq!(
            HistoricalPoint::try_from(resp).unwrap_err(),
            ValidationError::InvalidTimestamp("n/a".to_string())
        );
    }
}
