// =============================================================================
// stocklens — stock technical-analysis core
// =============================================================================
//
// A deterministic, stateless pipeline over a validated OHLCV series:
//
//   raw bars -> TimeSeries -> { moving averages, oscillators, bands, levels }
//            -> classified signals -> charting / dashboard payloads
//
// Everything is a pure function of an immutable `TimeSeries`; there is no
// shared state, no I/O and no retry logic.  Fetching quotes, HTTP routing
// and rendering belong to the caller.

pub mod analysis;
pub mod config;
pub mod error;
pub mod indicators;
pub mod levels;
pub mod series;
pub mod signals;
pub mod stats;

pub use analysis::{
    analyze, summarize, AnalysisPayload, IndicatorSeriesSet, IndicatorSummary, LevelPrices,
};
pub use config::{AnalysisConfig, LevelConfig};
pub use error::DataError;
pub use levels::{detect_levels, Level, LevelKind, LevelSet};
pub use series::{PriceBar, TimeSeries};
pub use signals::{Signal, SignalGrade, SignalValue};
pub use stats::SeriesStats;
