use thiserror::Error;

use crate::scoring::ScoreRangeViolation;

#[derive(Debug, Clone, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("instrument '{instrument_id}' is misconfigured: {}", .problems.join("; "))]
    InvalidDefinition {
        instrument_id: String,
        problems: Vec<String>,
    },

    #[error("instrument registry is misconfigured: {}", .0.join("; "))]
    InvalidRegistry(Vec<String>),

    #[error("insufficient data for '{instrument_id}': {answered} of {expected} items answered")]
    InsufficientData {
        instrument_id: String,
        answered: u32,
        expected: u32,
    },

    #[error("score out of range: {0}")]
    OutOfRange(#[from] ScoreRangeViolation),

    #[error("unknown response label '{label}' for question {ordinal}")]
    UnknownLabel { ordinal: u32, label: String },
}
