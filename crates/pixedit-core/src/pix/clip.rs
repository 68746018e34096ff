//! Rectangle cropping
//!
//! Extracts an axis-aligned sub-region of a buffer into a new buffer.
//! Unlike a clipping operation, cropping never shrinks the requested
//! rectangle to fit: a region that is empty or leaves the buffer is
//! rejected.

use super::PixelBuffer;
use crate::Rect;
use crate::color::BYTES_PER_PIXEL;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Extract the rectangular region `rect` into a new buffer.
    ///
    /// The output is `rect.w` x `rect.h`; output pixel `(x, y)` is source
    /// pixel `(rect.x + x, rect.y + y)`, all four channels copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the rectangle is empty or does
    /// not lie entirely inside the buffer. The source is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixedit_core::{PixelBuffer, Rect};
    ///
    /// let buf = PixelBuffer::new(100, 80).unwrap();
    /// let cropped = buf.crop(&Rect::new(10, 20, 50, 40)).unwrap();
    /// assert_eq!(cropped.width(), 50);
    /// assert_eq!(cropped.height(), 40);
    ///
    /// // Regions extending beyond the image are rejected, not clipped
    /// assert!(buf.crop(&Rect::new(80, 60, 50, 50)).is_err());
    /// ```
    pub fn crop(&self, rect: &Rect) -> Result<PixelBuffer> {
        if !rect.fits_within(self.width(), self.height()) {
            return Err(Error::InvalidRegion {
                rect: *rect,
                width: self.width(),
                height: self.height(),
            });
        }

        // fits_within guarantees non-negative, in-range values
        let (x, y) = (rect.x as u32, rect.y as u32);
        let (w, h) = (rect.w as u32, rect.h as u32);

        let mut out = PixelBuffer::new(w, h)?.to_mut();
        let start = x as usize * BYTES_PER_PIXEL;
        let len = w as usize * BYTES_PER_PIXEL;

        for dy in 0..h {
            let src = &self.row_data(y + dy)[start..start + len];
            out.row_data_mut(dy).copy_from_slice(src);
        }

        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;

    fn numbered(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h).unwrap().to_mut();
        for y in 0..h {
            for x in 0..w {
                buf.set_pixel_unchecked(x, y, Rgba::new(x as u8, y as u8, 7, 200));
            }
        }
        buf.into()
    }

    #[test]
    fn test_crop_copies_region() {
        let buf = numbered(5, 4);
        let out = buf.crop(&Rect::new(1, 2, 3, 2)).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(
                    out.get_pixel(x, y).unwrap(),
                    Rgba::new(x as u8 + 1, y as u8 + 2, 7, 200)
                );
            }
        }
    }

    #[test]
    fn test_crop_full_is_identity() {
        let buf = numbered(5, 4);
        let out = buf.crop(&Rect::full(5, 4)).unwrap();
        assert!(out.equals(&buf));
    }

    #[test]
    fn test_crop_single_pixel_corner() {
        let buf = numbered(5, 4);
        let out = buf.crop(&Rect::new(4, 3, 1, 1)).unwrap();
        assert_eq!(out.get_pixel(0, 0).unwrap(), Rgba::new(4, 3, 7, 200));
    }

    #[test]
    fn test_crop_rejects_invalid_regions() {
        let buf = numbered(5, 4);
        for rect in [
            Rect::new(0, 0, 0, 2),
            Rect::new(0, 0, 2, 0),
            Rect::new(0, 0, -1, 2),
            Rect::new(-1, 0, 2, 2),
            Rect::new(0, -1, 2, 2),
            Rect::new(4, 0, 2, 2),
            Rect::new(0, 3, 2, 2),
            Rect::new(5, 4, 1, 1),
        ] {
            let err = buf.crop(&rect).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidRegion {
                    rect,
                    width: 5,
                    height: 4
                }
            );
        }
    }

    #[test]
    fn test_crop_empty_source() {
        let buf = PixelBuffer::new(0, 0).unwrap();
        assert!(buf.crop(&Rect::new(0, 0, 1, 1)).is_err());
    }
}
