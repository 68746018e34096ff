//! Grayscale conversion
//!
//! Replaces the color channels of every pixel with their truncating
//! average. The output keeps the RGBA8 layout and the source dimensions;
//! alpha is never touched.

use super::{PixelBuffer, PixelBufferMut};
use crate::color::{BLUE, BYTES_PER_PIXEL, GREEN, RED, channel_average};

impl PixelBuffer {
    /// Convert to grayscale by channel averaging.
    ///
    /// For each pixel, `avg = floor((r + g + b) / 3)` and `r = g = b = avg`.
    /// Alpha is copied unchanged. Applying the conversion twice gives the
    /// same result as applying it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixedit_core::{PixelBuffer, Rgba};
    ///
    /// let buf = PixelBuffer::filled(1, 1, Rgba::new(255, 0, 0, 128)).unwrap();
    /// let gray = buf.to_grayscale();
    /// assert_eq!(gray.get_pixel(0, 0).unwrap(), Rgba::new(85, 85, 85, 128));
    /// ```
    pub fn to_grayscale(&self) -> PixelBuffer {
        let mut out = self.to_mut();
        out.grayscale_in_place();
        out.into()
    }
}

impl PixelBufferMut {
    /// Convert this buffer to grayscale in place.
    ///
    /// See [`PixelBuffer::to_grayscale`].
    pub fn grayscale_in_place(&mut self) {
        for px in self.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
            let avg = channel_average(px[RED], px[GREEN], px[BLUE]);
            px[RED] = avg;
            px[GREEN] = avg;
            px[BLUE] = avg;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;

    #[test]
    fn test_grayscale_values() {
        let mut buf = PixelBuffer::new(4, 1).unwrap().to_mut();
        buf.set_pixel(0, 0, Rgba::new(255, 0, 0, 255)).unwrap();
        buf.set_pixel(1, 0, Rgba::new(10, 20, 31, 0)).unwrap();
        buf.set_pixel(2, 0, Rgba::new(255, 255, 255, 17)).unwrap();
        buf.set_pixel(3, 0, Rgba::new(1, 1, 0, 99)).unwrap();
        let gray = PixelBuffer::from(buf).to_grayscale();

        assert_eq!(gray.get_pixel(0, 0).unwrap(), Rgba::new(85, 85, 85, 255));
        assert_eq!(gray.get_pixel(1, 0).unwrap(), Rgba::new(20, 20, 20, 0));
        assert_eq!(gray.get_pixel(2, 0).unwrap(), Rgba::new(255, 255, 255, 17));
        assert_eq!(gray.get_pixel(3, 0).unwrap(), Rgba::new(0, 0, 0, 99));
    }

    #[test]
    fn test_grayscale_keeps_source() {
        let buf = PixelBuffer::filled(2, 2, Rgba::BLUE).unwrap();
        let _ = buf.to_grayscale();
        assert_eq!(buf.get_pixel(1, 1).unwrap(), Rgba::BLUE);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let buf = PixelBuffer::filled(3, 3, Rgba::new(13, 200, 77, 5)).unwrap();
        let once = buf.to_grayscale();
        let twice = once.to_grayscale();
        assert!(once.equals(&twice));
    }

    #[test]
    fn test_grayscale_empty() {
        let buf = PixelBuffer::new(0, 3).unwrap();
        let gray = buf.to_grayscale();
        assert_eq!(gray.dimensions(), (0, 3));
    }
}
