// =============================================================================
// Signals Module
// =============================================================================
//
// Maps current indicator readings to a three-way classification with a
// deterministic, template-built explanation.  Classification logic lives
// apart from the numeric engines so thresholds stay unit-testable without
// running a single indicator.

pub mod classify;

pub use classify::{classify_cross, classify_macd, classify_rsi, Signal, SignalGrade, SignalValue};
