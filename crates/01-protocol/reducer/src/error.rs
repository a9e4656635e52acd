//! Error surface for the reduction protocol.
//!
//! Only programming errors are modelled here: asking a reducing function for a
//! seed it never declared, and handing a stage constructor parameters it cannot
//! honour. Failures inside user closures are not caught by the protocol.

use thiserror::Error;

/// Convenience result alias for fallible protocol operations.
pub type ReduceResult<T> = Result<T, ReduceError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("invalid argument for {stage}: {reason}")]
    InvalidArgument { stage: &'static str, reason: String },
}

impl ReduceError {
    pub fn invalid(stage: &'static str, reason: impl Into<String>) -> Self {
        ReduceError::InvalidArgument {
            stage,
            reason: reason.into(),
        }
    }
}
