//! Error types for pixedit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::Rect;
use thiserror::Error;

/// pixedit-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Image dimensions whose byte size cannot be represented
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw pixel data length does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Two buffers that must match in size do not
    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel access outside the buffer
    #[error("pixel ({x}, {y}) out of range for {width}x{height} buffer")]
    IndexOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Crop rectangle empty or not contained in the buffer
    #[error(
        "invalid region {}x{} at ({}, {}) for {width}x{height} buffer",
        .rect.w, .rect.h, .rect.x, .rect.y
    )]
    InvalidRegion { rect: Rect, width: u32, height: u32 },
}

/// Result type alias for pixedit-core operations
pub type Result<T> = std::result::Result<T, Error>;
