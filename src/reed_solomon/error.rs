//! Error types for Reed-Solomon codec construction and use
//!
//! An uncorrectable codeword is not an error: `decode` reports it as
//! `Ok(None)`. These variants cover misuse and the one internal invariant.

use crate::field::FieldError;
use thiserror::Error;

/// Errors that can occur while building or calling a Reed-Solomon codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Message or ECC length is zero, or the codeword length overflows
    #[error("Invalid codec parameters: {0}")]
    InvalidParameters(String),

    /// Builder was finalized without a required value
    #[error("Missing codec parameter: {0}")]
    MissingParameter(&'static str),

    /// Generator powers repeat before covering every codeword position
    #[error(
        "Generator has multiplicative order {order} but codewords of length {required} need at least {required} distinct powers"
    )]
    GeneratorOrderTooSmall { order: u64, required: usize },

    /// Message passed to `encode` has the wrong length
    #[error("Message has {actual} symbols, expected {expected}")]
    MessageLength { expected: usize, actual: usize },

    /// Codeword passed to `decode` has the wrong length
    #[error("Codeword has {actual} symbols, expected {expected}")]
    CodewordLength { expected: usize, actual: usize },

    /// Requested error budget exceeds half the ECC length
    #[error("Cannot correct {requested} errors, at most {max} are correctable")]
    ErrorCountOutOfRange { requested: usize, max: usize },

    /// Syndromes were nonzero after applying a correction
    #[error("Corrected codeword still has nonzero syndromes")]
    CorrectionCheckFailed,

    /// Invalid field element or failed field operation
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;
