use thiserror::Error;

/// A result set that cannot be displayed as-is.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("model reported an error: {0}")]
    Reported(String),

    #[error("total_samples is {total_samples} but {predictions} predictions were returned")]
    LengthMismatch {
        total_samples: usize,
        predictions: usize,
    },

    #[error(
        "candidate_count ({candidate_count}) + confirmed_count ({confirmed_count}) != total_samples ({total_samples})"
    )]
    CountMismatch {
        candidate_count: usize,
        confirmed_count: usize,
        total_samples: usize,
    },

    #[error("runtime_seconds must be a non-negative number, got {0}")]
    InvalidRuntime(f64),

    #[error("prediction {index} has confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { index: usize, confidence: f64 },
}

/// An unrecognised filter or sort name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {what} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    pub what: &'static str,
    pub value: String,
    pub expected: &'static str,
}
