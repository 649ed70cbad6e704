// =============================================================================
// Death / Golden Cross — long-horizon moving-average relation
// =============================================================================
//
// Compares a short SMA (conventionally 50 bars) against a long SMA
// (conventionally 200 bars) at the latest bar.  Short below long is the
// death-cross condition (bearish); short above long is the golden-cross side
// (bullish).  With fewer bars than the long window the relation is
// indeterminate and reported as `None`, never as a fabricated `false`.

use tracing::debug;

use crate::indicators::sma::sma;

/// `Some(true)` when the short SMA sits below the long SMA at the most
/// recent bar (death cross), `Some(false)` when it sits at or above it,
/// `None` when there is not enough history for the long SMA.
pub fn ma_cross(closes: &[f64], short: usize, long: usize) -> Option<bool> {
    if short == 0 || long == 0 || closes.len() < short.max(long) {
        debug!(
            bars = closes.len(),
            short,
            long,
            "ma_cross: insufficient history, relation indeterminate"
        );
        return None;
    }

    let short_ma = sma(closes, short).last().copied().flatten()?;
    let long_ma = sma(closes, long).last().copied().flatten()?;
    Some(short_ma < long_ma)
}
