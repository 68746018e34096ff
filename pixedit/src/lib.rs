//! pixedit - Minimal raster image editor core
//!
//! Open an image, apply pixel-level transforms, save the result.
//!
//! # Overview
//!
//! - Image I/O (PNG read/write, JPEG read) in [`io`]
//! - Geometric transforms (90° rotation, nearest-neighbor scale) in
//!   [`transform`]
//! - Grayscale and crop directly on [`PixelBuffer`]
//! - The [`EditorSession`] that holds the image being edited
//!
//! # Example
//!
//! ```
//! use pixedit::{EditorSession, PixelBuffer, Rgba, Transform};
//!
//! let mut session = EditorSession::new();
//! session.load(PixelBuffer::filled(640, 480, Rgba::RED).unwrap());
//! session.apply(Transform::Scale(0.5)).unwrap();
//! assert_eq!(session.export().unwrap().dimensions(), (320, 240));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixedit_core::*;

pub use pixedit_editor::{EditorSession, ErrorKind, SessionError, SessionResult, Transform};

// Re-export domain crates as modules to avoid name conflicts
pub use pixedit_editor as editor;
pub use pixedit_io as io;
pub use pixedit_transform as transform;
