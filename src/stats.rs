// =============================================================================
// Series summary statistics
// =============================================================================
//
// A single pure pass over a validated series producing the handful of
// headline figures a dashboard renders next to the signal summary: mean and
// standard deviation of per-bar returns, the price extremes, the latest
// close and the average volume.

use serde::{Deserialize, Serialize};

use crate::series::TimeSeries;

/// Headline statistics for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Mean of per-bar close-to-close returns.  Zero for a single bar.
    pub mean_return: f64,
    /// Sample standard deviation of per-bar returns.  Zero below three bars.
    pub return_std_dev: f64,
    /// Lowest low across the series.
    pub min_price: f64,
    /// Highest high across the series.
    pub max_price: f64,
    /// Close of the most recent bar.
    pub current_price: f64,
    /// Mean volume across the series.
    pub volume_avg: f64,
}

impl SeriesStats {
    pub fn compute(series: &TimeSeries) -> Self {
        let bars = series.bars();
        let n = bars.len();

        let returns: Vec<f64> = bars
            .windows(2)
            .filter(|w| w[0].close != 0.0)
            .map(|w| (w[1].close - w[0].close) / w[0].close)
            .collect();

        let mean_return = if returns.is_empty() {
            0.0
        } else {
            returns.iter().sum::<f64>() / returns.len() as f64
        };
        let return_std_dev = if returns.len() < 2 {
            0.0
        } else {
            let variance = returns.iter().map(|r| (r - mean_return).powi(2)).sum::<f64>()
                / (returns.len() - 1) as f64;
            variance.sqrt()
        };

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        let mut volume_sum = 0.0;
        for bar in bars {
            min_price = min_price.min(bar.low);
            max_price = max_price.max(bar.high);
            volume_sum += bar.volume;
        }

        Self {
            mean_return,
            return_std_dev,
            min_price,
            max_price,
            current_price: series.last().close,
            volume_avg: volume_sum / n as f64,
        }
    }
}
