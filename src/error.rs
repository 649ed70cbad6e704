// =============================================================================
// Error taxonomy
// =============================================================================
//
// `DataError` is the only failure mode of the analysis core.  Invalid input
// fails fast at the normalizer (or at config validation); short histories are
// never errors — indicators degrade to undefined values instead.
//
// Every variant carries enough context (bar index, field name) for the caller
// to surface a message naming the violated precondition.

use thiserror::Error;

/// Rejection reasons for raw input series and indicator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The raw bar list was empty.
    #[error("price series is empty")]
    EmptySeries,

    /// A price or volume field was NaN or infinite.
    #[error("non-finite {field} at bar {index}")]
    NonFiniteField { index: usize, field: &'static str },

    /// A price or volume field was negative.
    #[error("negative {field} at bar {index}")]
    NegativeField { index: usize, field: &'static str },

    /// A bar's timestamp did not strictly increase over its predecessor.
    #[error("timestamps not strictly increasing at bar {index}")]
    NonMonotonicTimestamp { index: usize },

    /// An indicator window was configured as zero.
    #[error("{name} window must be at least 1")]
    InvalidWindow { name: &'static str },

    /// A numeric tuning parameter was NaN, infinite or negative.
    #[error("{name} must be finite and non-negative")]
    InvalidParameter { name: &'static str },
}
