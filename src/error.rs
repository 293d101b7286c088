//! Error types shared by the preprocessing, metrics and training code.

/// Errors raised by the training engine.
///
/// Numeric trouble (zero-variance columns, saturated softmax output) is
/// handled where it happens and never shows up here. Undefined metrics are
/// reported as `f64::NAN` instead of an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: String,
        got: String,
    },

    #[error("batch size {batch_size} must be between 1 and the number of samples ({n_samples})")]
    InvalidBatchSize { batch_size: usize, n_samples: usize },

    #[error("invalid labels: {0}")]
    InvalidLabels(String),

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("model already fitted, call reset() before fitting another dataset")]
    AlreadyFitted,
}

impl Error {
    pub(crate) fn rows(context: &'static str, expected: usize, got: usize) -> Self {
        Error::ShapeMismatch {
            context,
            expected: format!("{expected} rows"),
            got: format!("{got} rows"),
        }
    }

    pub(crate) fn columns(context: &'static str, expected: usize, got: usize) -> Self {
        Error::ShapeMismatch {
            context,
            expected: format!("{expected} columns"),
            got: format!("{got} columns"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
