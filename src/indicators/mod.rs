// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the technical indicators used by
// the analysis pipeline.  Every series-returning function yields output that
// is exactly as long as its input and index-aligned to it: position `i`
// describes the state as of bar `i`, and `None` marks positions where the
// indicator is undefined (not enough history yet).  Insufficient history is a
// designed degradation, never an error.

pub mod bollinger;
pub mod cross;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{bollinger, BollingerSeries};
pub use cross::ma_cross;
pub use ema::ema;
pub use macd::{macd, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;
