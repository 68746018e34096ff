//! PixelBuffer - The main image container
//!
//! The `PixelBuffer` structure is the fundamental image type in pixedit.
//! Every buffer holds RGBA8 pixels.
//!
//! # Pixel layout
//!
//! - Four bytes per pixel, in R, G, B, A order
//! - Rows are stored top-to-bottom, pixels left-to-right
//! - Rows are tightly packed: the stride is always `width * 4`
//! - `data().len() == width * height * 4` for every buffer
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixelBufferMut` via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], then convert
//! back with `Into<PixelBuffer>`.

mod access;
mod clip;
mod compare;
mod convert;

pub use compare::PixelDiffResult;

use crate::color::{BYTES_PER_PIXEL, Rgba};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug)]
struct PixelData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (RGBA8, row-major)
    data: Vec<u8>,
}

impl PixelData {
    #[inline]
    fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// Compute the byte length of a `width` x `height` RGBA8 buffer.
fn byte_len_for(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::InvalidDimension { width, height })
}

/// PixelBuffer - Main image container
///
/// `PixelBuffer` is the fundamental image type in pixedit. It uses
/// reference counting via `Arc` for efficient cloning.
///
/// A zero-sized buffer (width or height of 0) is valid and holds no data.
///
/// # Examples
///
/// ```
/// use pixedit_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<PixelData>,
}

impl PixelBuffer {
    /// Create a new buffer with the specified dimensions.
    ///
    /// The image data is initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the byte size would overflow
    /// or the allocation fails.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len_for(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::InvalidDimension { width, height })?;
        data.resize(len, 0);
        Ok(PixelBuffer {
            inner: Arc::new(PixelData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a new buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let mut buf = Self::new(width, height)?.to_mut();
        buf.fill(color);
        Ok(buf.into())
    }

    /// Wrap raw RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len_for(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            inner: Arc::new(PixelData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// True when the buffer has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the bytes of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let stride = self.inner.stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        self.to_mut().into()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixelBufferMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: PixelData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }

    /// Consume the buffer and return its raw RGBA8 bytes.
    ///
    /// Copies only if the data is still shared with another clone.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }
}

/// Mutable PixelBuffer
///
/// Allows modification of image data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: PixelData,
}

impl PixelBufferMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the image data.
    ///
    /// The slice length is fixed, so the size invariant cannot be broken
    /// through it.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.stride();
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_array();
        for chunk in self.inner.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&px);
        }
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
