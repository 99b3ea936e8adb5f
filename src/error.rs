//! Error taxonomy for the prediction core.

use thiserror::Error;

/// Errors raised by feature extraction, recommendation rendering and
/// the aggregate analyses built on top of them.
///
/// Failures are terminal for the call that raised them; nothing in the
/// core retries or normalizes bad records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    /// Utilization is `utilized / allocated`, undefined for a zero allocation.
    #[error("Division by zero: project '{project}' has an allocated budget of 0")]
    DivisionByZero { project: String },

    /// A required field was absent from a loosely-typed project input.
    #[error("Missing required project field: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, PredictorError>;
