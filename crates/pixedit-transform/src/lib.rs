//! pixedit-transform - Geometric transformations for the pixedit editor
//!
//! This crate provides the geometric operations the editor applies to a
//! [`PixelBuffer`](pixedit_core::PixelBuffer):
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Uniform nearest-neighbor scaling
//!
//! Every function borrows its input and returns a new buffer; the input is
//! never modified.

mod error;
pub mod rotate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use rotate::{rotate_90, rotate_180, rotate_orth};
pub use scale::{
    MAX_OUTPUT_PIXELS, Rounding, ScaleOptions, scale, scale_with_options, scaled_dimensions,
};
