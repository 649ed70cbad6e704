// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// The value at index `i` is the arithmetic mean of the `window` closes ending
// at `i`.  Maintained with a rolling sum, so the whole series is produced in
// one linear pass regardless of window size.

/// Compute the aligned SMA series for `closes`.
///
/// `None` for every index before `window - 1`, and for the whole series when
/// `window == 0` or the input is shorter than `window`.
pub fn sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if window == 0 || n < window {
        return out;
    }

    let mut sum: f64 = closes[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);

    for i in window..n {
        sum += closes[i] - closes[i - window];
        out[i] = Some(sum / window as f64);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_empty_input() {
        assert!(sma(&[], 5).iter().all(Option::is_none));
    }

    #[test]
    fn sma_window_zero_is_all_undefined() {
        let out = sma(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn sma_insufficient_history_is_all_undefined() {
        // 5 closes, 20-bar window: every index undefined, not an error.
        let out = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 20);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn sma_alignment_and_values() {
        let closes: Vec<f64> = (1..=6).map(|x| x as f64).collect();
        let out = sma(&closes, 3);
        assert_eq!(out.len(), 6);
        assert_eq!(&out[..2], &[None, None]);
        // Means of [1,2,3], [2,3,4], ...
        for (i, expected) in [(2, 2.0), (3, 3.0), (4, 4.0), (5, 5.0)] {
            assert!((out[i].unwrap() - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn sma_constant_series_is_constant() {
        let out = sma(&[7.5; 40], 20);
        for value in out.iter().skip(19) {
            assert!((value.unwrap() - 7.5).abs() < 1e-10);
        }
    }

    #[test]
    fn sma_recompute_is_bit_identical() {
        let closes: Vec<f64> = (0..100).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
        assert_eq!(sma(&closes, 14), sma(&closes, 14));
    }
}
