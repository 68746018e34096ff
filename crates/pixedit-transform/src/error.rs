//! Error types for pixedit-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),

    /// Scale ratio that is not a finite, strictly positive number
    #[error("invalid scale ratio: {0} (must be finite and > 0)")]
    InvalidRatio(f64),

    /// Scaled dimensions do not fit in a `u32`
    #[error("scaled output of {width}x{height} is too large")]
    OutputTooLarge { width: f64, height: f64 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
