// =============================================================================
// Analysis Configuration
// =============================================================================
//
// Every tunable of the analysis pipeline lives here: indicator windows, the
// Bollinger band width, the crossover pair and the level-detector knobs.
// All fields carry `#[serde(default)]` so that deserializing a partial
// config (or an older one after new fields are added) always succeeds.

use serde::{Deserialize, Serialize};

use crate::error::DataError;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ma_window() -> usize {
    20
}

fn default_rsi_window() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_bollinger_window() -> usize {
    20
}

fn default_bollinger_num_std() -> f64 {
    2.0
}

fn default_cross_short() -> usize {
    50
}

fn default_cross_long() -> usize {
    200
}

fn default_level_radius() -> usize {
    5
}

fn default_level_tolerance_pct() -> f64 {
    0.5
}

fn default_max_levels() -> usize {
    3
}

/// Knobs for the support/resistance level detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// A bar is a local extremum when it beats every close within this many
    /// bars on each side.
    #[serde(default = "default_level_radius")]
    pub radius: usize,
    /// Extrema within this percentage of each other merge into one level.
    #[serde(default = "default_level_tolerance_pct")]
    pub tolerance_pct: f64,
    /// Cap on reported levels per kind, strongest first.
    #[serde(default = "default_max_levels")]
    pub max_levels: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            radius: default_level_radius(),
            tolerance_pct: default_level_tolerance_pct(),
            max_levels: default_max_levels(),
        }
    }
}

/// Full configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_ma_window")]
    pub sma_window: usize,
    #[serde(default = "default_ma_window")]
    pub ema_window: usize,
    #[serde(default = "default_rsi_window")]
    pub rsi_window: usize,
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,
    #[serde(default = "default_bollinger_window")]
    pub bollinger_window: usize,
    #[serde(default = "default_bollinger_num_std")]
    pub bollinger_num_std: f64,
    /// Short leg of the death/golden cross pair.
    #[serde(default = "default_cross_short")]
    pub cross_short: usize,
    /// Long leg of the death/golden cross pair.
    #[serde(default = "default_cross_long")]
    pub cross_long: usize,
    #[serde(default)]
    pub levels: LevelConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sma_window: default_ma_window(),
            ema_window: default_ma_window(),
            rsi_window: default_rsi_window(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            bollinger_window: default_bollinger_window(),
            bollinger_num_std: default_bollinger_num_std(),
            cross_short: default_cross_short(),
            cross_long: default_cross_long(),
            levels: LevelConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject configurations no engine can honour: zero windows and
    /// non-finite or negative numeric parameters.
    pub fn validate(&self) -> Result<(), DataError> {
        let windows: [(&'static str, usize); 9] = [
            ("sma", self.sma_window),
            ("ema", self.ema_window),
            ("rsi", self.rsi_window),
            ("macd fast", self.macd_fast),
            ("macd slow", self.macd_slow),
            ("macd signal", self.macd_signal),
            ("bollinger", self.bollinger_window),
            ("cross short", self.cross_short),
            ("cross long", self.cross_long),
        ];
        for (name, window) in windows {
            if window == 0 {
                return Err(DataError::InvalidWindow { name });
            }
        }
        if !self.bollinger_num_std.is_finite() || self.bollinger_num_std < 0.0 {
            return Err(DataError::InvalidParameter { name: "bollinger_num_std" });
        }
        if !self.levels.tolerance_pct.is_finite() || self.levels.tolerance_pct < 0.0 {
            return Err(DataError::InvalidParameter { name: "levels.tolerance_pct" });
        }
        Ok(())
    }
}
