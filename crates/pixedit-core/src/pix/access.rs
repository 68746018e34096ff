//! Pixel access functions
//!
//! Checked and unchecked getters/setters for individual pixels.
//! Checked access never clamps: coordinates outside the buffer are an
//! error.

use super::{PixelBuffer, PixelBufferMut, PixelData};
use crate::color::{BYTES_PER_PIXEL, Rgba};
use crate::error::{Error, Result};

impl PixelData {
    #[inline]
    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * BYTES_PER_PIXEL
    }

    #[inline]
    fn pixel_at(&self, x: u32, y: u32) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} buffer",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        Rgba::from_slice(&self.data[i..i + BYTES_PER_PIXEL])
    }
}

impl PixelBuffer {
    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        self.inner.check_bounds(x, y)?;
        Ok(self.inner.pixel_at(x, y))
    }

    /// Get a pixel value without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.pixel_at(x, y)
    }
}

impl PixelBufferMut {
    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        self.inner.check_bounds(x, y)?;
        Ok(self.inner.pixel_at(x, y))
    }

    /// Get a pixel value without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.pixel_at(x, y)
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: Rgba) -> Result<()> {
        self.inner.check_bounds(x, y)?;
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: Rgba) {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({x}, {y}) out of range for {}x{} buffer",
            self.inner.width,
            self.inner.height
        );
        let i = self.inner.offset(x, y);
        self.inner.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&val.to_array());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut buf = PixelBuffer::new(3, 2).unwrap().to_mut();
        buf.set_pixel(2, 1, Rgba::new(10, 20, 30, 40)).unwrap();
        assert_eq!(buf.get_pixel(2, 1).unwrap(), Rgba::new(10, 20, 30, 40));
        assert_eq!(buf.get_pixel(0, 0).unwrap(), Rgba::TRANSPARENT);

        let buf: PixelBuffer = buf.into();
        assert_eq!(buf.get_pixel(2, 1).unwrap(), Rgba::new(10, 20, 30, 40));
        // Last pixel occupies the last four bytes
        assert_eq!(&buf.data()[20..24], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_get_out_of_range() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(
            buf.get_pixel(3, 0).unwrap_err(),
            Error::IndexOutOfRange {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            }
        );
        assert!(buf.get_pixel(0, 2).is_err());
    }

    #[test]
    fn test_set_out_of_range_leaves_buffer_untouched() {
        let mut buf = PixelBuffer::new(2, 2).unwrap().to_mut();
        assert!(buf.set_pixel(2, 2, Rgba::WHITE).is_err());
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_buffer_has_no_pixels() {
        let buf = PixelBuffer::new(0, 0).unwrap();
        assert!(buf.get_pixel(0, 0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_unchecked_panics_out_of_range() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        let _ = buf.get_pixel_unchecked(5, 0);
    }
}
