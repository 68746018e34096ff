//! Buffer comparison
//!
//! Exact equality and pixel difference counting, used by tests and by
//! hosts that want to know whether an edit changed anything.

use super::PixelBuffer;
use crate::color::BYTES_PER_PIXEL;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two buffers
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDiffResult {
    /// Number of pixels that differ in any channel
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Coordinates of the first differing pixel in row-major order
    pub first_diff: Option<(u32, u32)>,
}

impl PixelBuffer {
    /// Check if two buffers have the same dimensions and identical bytes.
    pub fn equals(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions() && self.data() == other.data()
    }

    /// Count the number of pixels that differ between two buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the buffers have different
    /// dimensions.
    pub fn count_pixel_diffs(&self, other: &PixelBuffer) -> Result<PixelDiffResult> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let w = self.width() as usize;
        let mut n_diff = 0u64;
        let mut first_diff = None;
        let pairs = self
            .data()
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(other.data().chunks_exact(BYTES_PER_PIXEL));

        for (i, (a, b)) in pairs.enumerate() {
            if a != b {
                n_diff += 1;
                if first_diff.is_none() {
                    first_diff = Some(((i % w) as u32, (i / w) as u32));
                }
            }
        }

        let total = self.width() as u64 * self.height() as u64;
        let fract_diff = if total == 0 {
            0.0
        } else {
            n_diff as f64 / total as f64
        };

        Ok(PixelDiffResult {
            n_diff,
            fract_diff,
            first_diff,
        })
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PixelBuffer {}
