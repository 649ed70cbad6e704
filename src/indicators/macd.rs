// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD_i      = EMA(fast)_i - EMA(slow)_i
// Signal_i    = EMA(signal window) over the defined region of the MACD line
// Histogram_i = MACD_i - Signal_i
//
// The MACD line is undefined before the slow EMA seeds; the signal line needs
// a further `signal - 1` defined MACD values on top of that.

use serde::{Deserialize, Serialize};

use crate::indicators::ema::ema;

/// The three aligned MACD series.  All vectors share the input length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Compute MACD, signal and histogram for `closes`.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_window: usize) -> MacdSeries {
    let n = closes.len();
    let ema_fast = ema(closes, fast);
    let ema_slow = ema(closes, slow);

    let mut macd_line = vec![None; n];
    for i in 0..n {
        if let (Some(f), Some(s)) = (ema_fast[i], ema_slow[i]) {
            macd_line[i] = Some(f - s);
        }
    }

    // The defined region of the MACD line is contiguous (it starts where the
    // slower EMA seeds), so the signal EMA runs over that tail and is shifted
    // back into alignment.
    let mut signal = vec![None; n];
    if let Some(start) = macd_line.iter().position(Option::is_some) {
        let region: Vec<f64> = macd_line[start..].iter().copied().flatten().collect();
        for (offset, value) in ema(&region, signal_window).into_iter().enumerate() {
            signal[start + offset] = value;
        }
    }

    let mut histogram = vec![None; n];
    for i in 0..n {
        if let (Some(m), Some(s)) = (macd_line[i], signal[i]) {
            histogram[i] = Some(m - s);
        }
    }

    MacdSeries { macd: macd_line, signal, histogram }
}
