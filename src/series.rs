// =============================================================================
// Price series data model and normalizer
// =============================================================================
//
// `PriceBar` is the per-period OHLCV record; `TimeSeries` is the validated,
// chronologically ordered sequence every engine consumes.  A `TimeSeries` can
// only be built through `from_bars`, so holding one is proof that the data
// passed validation: non-empty, all numeric fields finite and non-negative,
// timestamps strictly increasing.
//
// The normalizer never resamples or fills gaps.  Intraday series with
// irregular spacing pass through unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A single OHLCV bar.  Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// The numeric fields paired with their names, for validation and
    /// error reporting.
    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
    }
}

/// A validated, chronologically ordered OHLCV series.  Length >= 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    bars: Vec<PriceBar>,
}

impl TimeSeries {
    /// Validate a raw bar list (possibly from an untrusted source) into a
    /// `TimeSeries`.
    ///
    /// Fails with the first violated precondition:
    /// - `EmptySeries` when the list is empty
    /// - `NonFiniteField` / `NegativeField` for malformed numeric fields
    /// - `NonMonotonicTimestamp` when a timestamp does not strictly
    ///   increase over its predecessor
    pub fn from_bars(bars: Vec<PriceBar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::EmptySeries);
        }

        for (index, bar) in bars.iter().enumerate() {
            for (field, value) in bar.fields() {
                if !value.is_finite() {
                    return Err(DataError::NonFiniteField { index, field });
                }
                if value < 0.0 {
                    return Err(DataError::NegativeField { index, field });
                }
            }
            if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
                return Err(DataError::NonMonotonicTimestamp { index });
            }
        }

        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false: the normalizer rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The most recent bar.
    pub fn last(&self) -> &PriceBar {
        // Non-empty by construction.
        &self.bars[self.bars.len() - 1]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Timestamps formatted as `YYYY-MM-DD`, one per bar.
    pub fn dates(&self) -> Vec<String> {
        self.bars
            .iter()
            .map(|b| b.timestamp.format("%Y-%m-%d").to_string())
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar(day: u32, close: f64) -> PriceBar {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        PriceBar {
            timestamp,
            open: close,
            high: close + 1.0,
            low: (close - 1.0).max(0.0),
            close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(TimeSeries::from_bars(vec![]), Err(DataError::EmptySeries));
    }

    #[test]
    fn rejects_non_finite_close() {
        let mut bad = bar(2, 10.0);
        bad.close = f64::NAN;
        let result = TimeSeries::from_bars(vec![bar(1, 10.0), bad]);
        assert_eq!(
            result,
            Err(DataError::NonFiniteField { index: 1, field: "close" })
        );
    }

    #[test]
    fn rejects_negative_volume() {
        let mut bad = bar(1, 10.0);
        bad.volume = -5.0;
        let result = TimeSeries::from_bars(vec![bad]);
        assert_eq!(
            result,
            Err(DataError::NegativeField { index: 0, field: "volume" })
        );
    }

    #[test]
    fn rejects_non_monotonic_timestamps() {
        let result = TimeSeries::from_bars(vec![bar(3, 10.0), bar(2, 11.0)]);
        assert_eq!(result, Err(DataError::NonMonotonicTimestamp { index: 1 }));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let result = TimeSeries::from_bars(vec![bar(2, 10.0), bar(2, 11.0)]);
        assert_eq!(result, Err(DataError::NonMonotonicTimestamp { index: 1 }));
    }

    #[test]
    fn accepts_valid_series_and_preserves_order() {
        let series =
            TimeSeries::from_bars(vec![bar(1, 10.0), bar(2, 11.0), bar(5, 12.0)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
        assert_eq!(series.last().close, 12.0);
        // Gaps pass through unchanged: Jan 2 -> Jan 5 is not resampled.
        assert_eq!(series.dates(), vec!["2024-01-01", "2024-01-02", "2024-01-05"]);
    }

    #[test]
    fn single_bar_series_is_valid() {
        let series = TimeSeries::from_bars(vec![bar(1, 42.0)]).unwrap();
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
    }
}
