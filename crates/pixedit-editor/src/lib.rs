//! pixedit-editor - Editing session for the pixedit image editor
//!
//! An [`EditorSession`] owns the image being edited. The host loads a
//! decoded buffer, applies [`Transform`] requests one at a time, and
//! exports the result for encoding. Transforms are pure: each one computes
//! a new buffer from the current one, and the session swaps it in only on
//! success.
//!
//! # Example
//!
//! ```
//! use pixedit_core::{PixelBuffer, Rect, Rgba};
//! use pixedit_editor::{EditorSession, Transform};
//!
//! let mut session = EditorSession::new();
//! session.load(PixelBuffer::filled(4, 2, Rgba::RED).unwrap());
//! session.apply(Transform::Rotate).unwrap();
//! session.apply(Transform::Crop(Rect::new(0, 0, 2, 2))).unwrap();
//! assert_eq!(session.export().unwrap().dimensions(), (2, 2));
//! ```

mod error;
mod session;

pub use error::{ErrorKind, SessionError, SessionResult};
pub use session::{EditorSession, Transform};
