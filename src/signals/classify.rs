// =============================================================================
// Signal Classification
// =============================================================================
//
// Fixed thresholds:
//   RSI          < 30 => Good (oversold),  > 70 => Bad (overbought), else Warning
//   Death cross  true => Bad,  false => Good,  indeterminate => Warning
//   MACD - Sig   > 0  => Good, < 0  => Bad,  0 => Warning
//
// Every explanation is a template parameterized by the numeric value and the
// threshold it was compared against.  An indicator that cannot be computed
// (short history) yields a `Warning` with a null value and an explanation
// naming the bar requirement — degradation, not an error.

use serde::{Deserialize, Serialize};

/// Oversold threshold for RSI.
pub const RSI_OVERSOLD: f64 = 30.0;
/// Overbought threshold for RSI.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Three-way classification of an indicator reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalGrade {
    Good,
    Warning,
    Bad,
}

impl std::fmt::Display for SignalGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// The reading a signal was classified from: a number or a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    Number(f64),
    Flag(bool),
}

/// A classified indicator reading.  `value` is `None` when the indicator was
/// indeterminate for the given history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub value: Option<SignalValue>,
    #[serde(rename = "signal")]
    pub classification: SignalGrade,
    pub explanation: String,
}

/// Classify the latest RSI reading.  `window` is only used to phrase the
/// insufficient-history explanation.
pub fn classify_rsi(value: Option<f64>, window: usize) -> Signal {
    let Some(rsi) = value else {
        return Signal {
            value: None,
            classification: SignalGrade::Warning,
            explanation: format!(
                "RSI is indeterminate: requires at least {} bars of history.",
                window + 1
            ),
        };
    };

    let (classification, explanation) = if rsi > RSI_OVERBOUGHT {
        (
            SignalGrade::Bad,
            format!(
                "RSI {rsi:.2} is overbought (>{RSI_OVERBOUGHT:.0}), suggesting a potential sell signal."
            ),
        )
    } else if rsi < RSI_OVERSOLD {
        (
            SignalGrade::Good,
            format!(
                "RSI {rsi:.2} is oversold (<{RSI_OVERSOLD:.0}), suggesting a potential buy signal."
            ),
        )
    } else {
        (
            SignalGrade::Warning,
            format!(
                "RSI {rsi:.2} is in neutral territory ({RSI_OVERSOLD:.0}-{RSI_OVERBOUGHT:.0})."
            ),
        )
    };

    Signal { value: Some(SignalValue::Number(rsi)), classification, explanation }
}

/// Classify the death/golden-cross relation between the `short`- and
/// `long`-period moving averages.  `None` means the history was shorter than
/// the long window.
pub fn classify_cross(bearish: Option<bool>, short: usize, long: usize) -> Signal {
    match bearish {
        Some(true) => Signal {
            value: Some(SignalValue::Flag(true)),
            classification: SignalGrade::Bad,
            explanation: format!(
                "Death Cross detected ({short}-period MA below {long}-period MA), indicating a bearish trend."
            ),
        },
        Some(false) => Signal {
            value: Some(SignalValue::Flag(false)),
            classification: SignalGrade::Good,
            explanation: format!(
                "No Death Cross detected ({short}-period MA at or above {long}-period MA), indicating a bullish trend."
            ),
        },
        None => Signal {
            value: None,
            classification: SignalGrade::Warning,
            explanation: format!(
                "Death Cross is indeterminate: requires at least {long} bars of history."
            ),
        },
    }
}

/// Classify the gap between the MACD line and its signal line at the latest
/// bar.  `min_bars` is only used to phrase the insufficient-history
/// explanation.
pub fn classify_macd(delta: Option<f64>, min_bars: usize) -> Signal {
    let Some(delta) = delta else {
        return Signal {
            value: None,
            classification: SignalGrade::Warning,
            explanation: format!(
                "MACD is indeterminate: requires at least {min_bars} bars of history."
            ),
        };
    };

    let (classification, explanation) = if delta > 0.0 {
        (
            SignalGrade::Good,
            format!("MACD is {delta:.4} above the signal line, indicating bullish momentum."),
        )
    } else if delta < 0.0 {
        (
            SignalGrade::Bad,
            format!(
                "MACD is {:.4} below the signal line, indicating bearish momentum.",
                delta.abs()
            ),
        )
    } else {
        (
            SignalGrade::Warning,
            "MACD is at the signal line, indicating neutral momentum.".to_string(),
        )
    };

    Signal { value: Some(SignalValue::Number(delta)), classification, explanation }
}
