use thiserror::Error;

/// Errors raised while normalizing a report table.
///
/// Malformed cell values never produce an error; they degrade to empty
/// strings or missing timestamps.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// The input table lacks a column of the raw report schema.
    #[error("required column '{column}' not found in report table")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizationError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
