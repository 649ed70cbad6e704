// =============================================================================
// Analysis Orchestrator
// =============================================================================
//
// Composes the engines into the two shapes the UI layer consumes:
//
//   `analyze`   — the full charting payload: dates, closes, volumes, every
//                 aligned indicator series and the detected levels.
//   `summarize` — the compact dashboard payload: RSI, death-cross and MACD
//                 classified from the most recent bar only.
//
// Both are pure functions of an immutable `TimeSeries`; independent calls
// share no state.  Undefined leading indicator positions serialize as JSON
// `null` so index alignment with `dates` stays exact.  Serialized field
// names match the charting wire contract (`SMA_20`, `MACD_Signal`,
// `deathCross`, ...) regardless of the configured windows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::DataError;
use crate::indicators::{bollinger, ema, ma_cross, macd, rsi, sma};
use crate::levels::{detect_levels, LevelSet};
use crate::series::TimeSeries;
use crate::signals::{classify_cross, classify_macd, classify_rsi, Signal};

/// The aligned indicator series of the full analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeriesSet {
    #[serde(rename = "SMA_20")]
    pub sma: Vec<Option<f64>>,
    #[serde(rename = "EMA_20")]
    pub ema: Vec<Option<f64>>,
    #[serde(rename = "RSI")]
    pub rsi: Vec<Option<f64>>,
    #[serde(rename = "MACD")]
    pub macd: Vec<Option<f64>>,
    #[serde(rename = "MACD_Signal")]
    pub macd_signal: Vec<Option<f64>>,
    #[serde(rename = "BB_upper")]
    pub bb_upper: Vec<Option<f64>>,
    #[serde(rename = "BB_middle")]
    pub bb_middle: Vec<Option<f64>>,
    #[serde(rename = "BB_lower")]
    pub bb_lower: Vec<Option<f64>>,
}

/// Support/resistance prices ordered by strength, strongest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPrices {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl From<LevelSet> for LevelPrices {
    fn from(levels: LevelSet) -> Self {
        Self {
            support: levels.support.into_iter().map(|l| l.price).collect(),
            resistance: levels.resistance.into_iter().map(|l| l.price).collect(),
        }
    }
}

/// Output A — the full charting payload.  All arrays share the series
/// length and are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
    pub indicators: IndicatorSeriesSet,
    pub levels: LevelPrices,
}

/// Output B — the compact dashboard payload, classified from the latest bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    pub rsi: Signal,
    #[serde(rename = "deathCross")]
    pub death_cross: Signal,
    pub macd: Signal,
}

/// Run every engine over `series` and assemble the charting payload.
pub fn analyze(series: &TimeSeries, config: &AnalysisConfig) -> Result<AnalysisPayload, DataError> {
    config.validate()?;
    let closes = series.closes();
    debug!(bars = closes.len(), "analyze: computing aligned indicator series");

    let macd_series = macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
    let bands = bollinger(&closes, config.bollinger_window, config.bollinger_num_std);
    let levels = detect_levels(&closes, &config.levels);
    debug!(
        support = levels.support.len(),
        resistance = levels.resistance.len(),
        "analyze: level detection complete"
    );

    Ok(AnalysisPayload {
        dates: series.dates(),
        prices: closes.clone(),
        volumes: series.volumes(),
        indicators: IndicatorSeriesSet {
            sma: sma(&closes, config.sma_window),
            ema: ema(&closes, config.ema_window),
            rsi: rsi(&closes, config.rsi_window),
            macd: macd_series.macd,
            macd_signal: macd_series.signal,
            bb_upper: bands.upper,
            bb_middle: bands.middle,
            bb_lower: bands.lower,
        },
        levels: levels.into(),
    })
}

/// Classify RSI, death-cross and MACD from the most recent bar.
pub fn summarize(
    series: &TimeSeries,
    config: &AnalysisConfig,
) -> Result<IndicatorSummary, DataError> {
    config.validate()?;
    let closes = series.closes();

    let rsi_last = rsi(&closes, config.rsi_window).last().copied().flatten();

    let macd_series = macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
    let macd_delta = match (
        macd_series.macd.last().copied().flatten(),
        macd_series.signal.last().copied().flatten(),
    ) {
        (Some(line), Some(signal)) => Some(line - signal),
        _ => None,
    };
    // Bars needed before the signal line seeds.
    let macd_min_bars = config.macd_slow + config.macd_signal - 1;

    let cross = ma_cross(&closes, config.cross_short, config.cross_long);

    debug!(
        bars = closes.len(),
        rsi = ?rsi_last,
        macd_delta = ?macd_delta,
        death_cross = ?cross,
        "summarize: latest-bar readings"
    );

    Ok(IndicatorSummary {
        rsi: classify_rsi(rsi_last, config.rsi_window),
        death_cross: classify_cross(cross, config.cross_short, config.cross_long),
        macd: classify_macd(macd_delta, macd_min_bars),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::PriceBar;
    use crate::signals::{SignalGrade, SignalValue};
    use chrono::{Duration, TimeZone, Utc};

    fn series(closes: &[f64]) -> TimeSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                timestamp: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
                    + Duration::days(i as i64),
                open: close,
                high: close + 1.0,
                low: (close - 1.0).max(0.0),
                close,
                volume: 1_000.0,
            })
            .collect();
        TimeSeries::from_bars(bars).unwrap()
    }

    #[test]
    fn analyze_arrays_are_index_aligned() {
        let input = series(&(1..=60).map(|x| x as f64).collect::<Vec<_>>());
        let payload = analyze(&input, &AnalysisConfig::default()).unwrap();

        assert_eq!(payload.dates.len(), 60);
        assert_eq!(payload.prices.len(), 60);
        assert_eq!(payload.volumes.len(), 60);
        let ind = &payload.indicators;
        for arr in [
            &ind.sma, &ind.ema, &ind.rsi, &ind.macd, &ind.macd_signal,
            &ind.bb_upper, &ind.bb_middle, &ind.bb_lower,
        ] {
            assert_eq!(arr.len(), 60);
        }
        // Leading positions are undefined, not dropped.
        assert!(ind.sma[18].is_none());
        assert!(ind.sma[19].is_some());
    }

    #[test]
    fn analyze_rejects_zero_window_config() {
        let input = series(&[1.0, 2.0, 3.0]);
        let config = AnalysisConfig { rsi_window: 0, ..AnalysisConfig::default() };
        assert_eq!(
            analyze(&input, &config),
            Err(DataError::InvalidWindow { name: "rsi" })
        );
    }

    #[test]
    fn analyze_short_series_degrades_to_null_indicators() {
        // 5 bars against 20-bar windows: arrays full of null, no error.
        let payload = analyze(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), &AnalysisConfig::default())
            .unwrap();
        assert!(payload.indicators.sma.iter().all(Option::is_none));
        assert!(payload.indicators.rsi.iter().all(Option::is_none));
        assert!(payload.levels.support.is_empty());
    }

    #[test]
    fn analyze_serializes_wire_field_names_and_null_sentinels() {
        let input = series(&(1..=25).map(|x| x as f64).collect::<Vec<_>>());
        let payload = analyze(&input, &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        let indicators = &json["indicators"];
        for key in [
            "SMA_20", "EMA_20", "RSI", "MACD", "MACD_Signal",
            "BB_upper", "BB_middle", "BB_lower",
        ] {
            assert!(indicators[key].is_array(), "missing {key}");
            assert_eq!(indicators[key].as_array().unwrap().len(), 25);
        }
        // Index 0 is an undefined leading position: null, not omitted.
        assert!(indicators["SMA_20"][0].is_null());
        assert!(indicators["SMA_20"][19].is_number());
        assert!(json["levels"]["support"].is_array());
    }

    #[test]
    fn analyze_is_deterministic() {
        let input = series(&(0..80).map(|i| 100.0 + (i as f64 * 0.5).sin()).collect::<Vec<_>>());
        let config = AnalysisConfig::default();
        assert_eq!(analyze(&input, &config).unwrap(), analyze(&input, &config).unwrap());
    }

    #[test]
    fn summarize_death_cross_scenario() {
        // Uptrend then collapse: the 50-bar SMA crosses below the 200-bar SMA
        // within the final five bars.
        let mut closes: Vec<f64> = (1..=230).map(|x| x as f64).collect();
        closes.extend(std::iter::repeat(1.0).take(25));
        let summary = summarize(&series(&closes), &AnalysisConfig::default()).unwrap();

        assert_eq!(summary.death_cross.value, Some(SignalValue::Flag(true)));
        assert_eq!(summary.death_cross.classification, SignalGrade::Bad);
    }

    #[test]
    fn summarize_uptrend_is_overbought_and_golden() {
        // Accelerating uptrend: every delta is a gain and the MACD line runs
        // above its signal line.
        let closes: Vec<f64> = (0..250).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
        let summary = summarize(&series(&closes), &AnalysisConfig::default()).unwrap();

        assert_eq!(summary.rsi.value, Some(SignalValue::Number(100.0)));
        assert_eq!(summary.rsi.classification, SignalGrade::Bad);
        assert_eq!(summary.death_cross.value, Some(SignalValue::Flag(false)));
        assert_eq!(summary.death_cross.classification, SignalGrade::Good);
        assert_eq!(summary.macd.classification, SignalGrade::Good);
    }

    #[test]
    fn summarize_downtrend_is_oversold() {
        let closes: Vec<f64> = (1..=250).rev().map(|x| x as f64).collect();
        let summary = summarize(&series(&closes), &AnalysisConfig::default()).unwrap();

        assert_eq!(summary.rsi.value, Some(SignalValue::Number(0.0)));
        assert_eq!(summary.rsi.classification, SignalGrade::Good);
    }

    #[test]
    fn summarize_recent_selloff_turns_macd_bad() {
        // A long rise followed by a steady fall drags the MACD line below
        // its signal line.
        let mut closes: Vec<f64> = (1..=200).map(|x| x as f64).collect();
        closes.extend((1..=50).map(|i| 200.0 - 2.0 * i as f64));
        let summary = summarize(&series(&closes), &AnalysisConfig::default()).unwrap();

        assert_eq!(summary.macd.classification, SignalGrade::Bad);
    }

    #[test]
    fn summarize_short_history_is_indeterminate_everywhere() {
        let summary = summarize(&series(&[1.0, 2.0, 3.0]), &AnalysisConfig::default()).unwrap();
        for signal in [&summary.rsi, &summary.death_cross, &summary.macd] {
            assert_eq!(signal.value, None);
            assert_eq!(signal.classification, SignalGrade::Warning);
        }
    }

    #[test]
    fn summary_serializes_death_cross_key() {
        let closes: Vec<f64> = (1..=250).map(|x| x as f64).collect();
        let summary = summarize(&series(&closes), &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json.get("deathCross").is_some());
        assert_eq!(json["deathCross"]["value"], serde_json::json!(false));
        assert_eq!(json["deathCross"]["signal"], "good");
        assert!(json["rsi"]["explanation"].is_string());
    }
}
