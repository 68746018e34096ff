//! Error types for pixedit-editor

use thiserror::Error;

/// Errors returned by [`EditorSession`](crate::EditorSession)
#[derive(Debug, Error)]
pub enum SessionError {
    /// A transform or export was requested before any image was loaded
    #[error("no image loaded")]
    NoImageLoaded,

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),

    /// Transform error
    #[error("transform error: {0}")]
    Transform(#[from] pixedit_transform::TransformError),
}

/// Coarse classification of a [`SessionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A pixel coordinate outside the buffer
    IndexOutOfRange,
    /// A crop rectangle that is empty or not inside the buffer
    InvalidRegion,
    /// A scale ratio that is not finite and positive
    InvalidRatio,
    /// Nothing has been loaded yet
    NoImageLoaded,
    /// Anything else (allocation limits, malformed buffers)
    Other,
}

impl SessionError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        use pixedit_core::Error as CoreError;
        use pixedit_transform::TransformError;

        let core_kind = |e: &CoreError| match e {
            CoreError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            CoreError::InvalidRegion { .. } => ErrorKind::InvalidRegion,
            _ => ErrorKind::Other,
        };

        match self {
            SessionError::NoImageLoaded => ErrorKind::NoImageLoaded,
            SessionError::Core(e) => core_kind(e),
            SessionError::Transform(TransformError::Core(e)) => core_kind(e),
            SessionError::Transform(TransformError::InvalidRatio(_)) => ErrorKind::InvalidRatio,
            SessionError::Transform(_) => ErrorKind::Other,
        }
    }

    /// Whether the user can fix this by picking different parameters or
    /// loading an image.
    ///
    /// `IndexOutOfRange` is a caller bug and `Other` is not actionable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::IndexOutOfRange | ErrorKind::Other)
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
