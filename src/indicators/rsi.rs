// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the simple average of the
//          first `window` deltas; the first defined value lands at index
//          `window` (one delta per close after the first).
// Step 3 — Apply Wilder's smoothing:
//            avg_gain = (prev_avg_gain * (window - 1) + gain) / window
//            avg_loss = (prev_avg_loss * (window - 1) + loss) / window
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// When the average loss is zero the RSI reads 100 rather than dividing by
// zero; the output is bounded to [0, 100] for any finite input.

use tracing::debug;

/// Compute the aligned RSI series for `closes`.
///
/// `None` before index `window`, and for the whole series when `window == 0`
/// or there are fewer than `window + 1` closes (`window` deltas).
pub fn rsi(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if window == 0 || n < window + 1 {
        debug!(bars = n, window, "rsi: insufficient history, returning undefined series");
        return out;
    }

    let window_f = window as f64;

    // Seed averages with the simple mean of the first `window` deltas.
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=window {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            avg_gain += delta;
        } else {
            avg_loss += -delta;
        }
    }
    avg_gain /= window_f;
    avg_loss /= window_f;
    out[window] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for subsequent bars.
    for i in window + 1..n {
        let delta = closes[i] - closes[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        avg_gain = (avg_gain * (window_f - 1.0) + gain) / window_f;
        avg_loss = (avg_loss * (window_f - 1.0) + loss) / window_f;
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// Zero average loss means no down moves in the window: RSI is 100.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
