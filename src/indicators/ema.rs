// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average.
//
// Formula:
//   multiplier = 2 / (window + 1)
//   EMA_i      = close_i * multiplier + EMA_{i-1} * (1 - multiplier)
//
// The first value is seeded with the SMA of the first `window` closes, at
// index `window - 1`.  This seeding rule is canonical: the MACD and signal
// lines are built on it, so changing it changes every downstream trajectory.

/// Compute the aligned EMA series for `closes`.
///
/// `None` before the seed index `window - 1`, and for the whole series when
/// `window == 0` or the input is shorter than `window`.  Single linear pass.
pub fn ema(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if window == 0 || n < window {
        return out;
    }

    let multiplier = 2.0 / (window as f64 + 1.0);

    // Seed: SMA of the first `window` closes.
    let seed = closes[..window].iter().sum::<f64>() / window as f64;
    out[window - 1] = Some(seed);

    let mut prev = seed;
    for i in window..n {
        let value = closes[i] * multiplier + prev * (1.0 - multiplier);
        out[i] = Some(value);
        prev = value;
    }

    out
}
