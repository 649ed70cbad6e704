// =============================================================================
// Bollinger Bands
// =============================================================================
//
// A volatility envelope around the SMA: middle = SMA(window), upper/lower =
// middle +/- num_std * sigma, where sigma is the population standard
// deviation over the same trailing window (no Bessel correction — the
// population form keeps numeric parity with the charting reference).
//
// Invariant: lower <= middle <= upper wherever defined, for num_std >= 0.

use serde::{Deserialize, Serialize};

use crate::indicators::sma::sma;

/// The three aligned Bollinger band series.  All vectors share the input
/// length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Compute Bollinger Bands for `closes`.
///
/// Undefined before the window fills; the whole series is undefined when
/// `window == 0` or the input is shorter than `window`.
pub fn bollinger(closes: &[f64], window: usize, num_std: f64) -> BollingerSeries {
    let n = closes.len();
    let middle = sma(closes, window);
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    if window == 0 || n < window {
        return BollingerSeries { upper, middle, lower };
    }

    for i in window - 1..n {
        let Some(mean) = middle[i] else { continue };
        let slice = &closes[i + 1 - window..=i];
        let variance =
            slice.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window as f64;
        let std_dev = variance.sqrt();
        upper[i] = Some(mean + num_std * std_dev);
        lower[i] = Some(mean - num_std * std_dev);
    }

    BollingerSeries { upper, middle, lower }
}
