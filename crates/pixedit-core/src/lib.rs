//! pixedit core - Pixel buffer data structures
//!
//! This crate provides the fundamental data structures used throughout
//! the pixedit image editor:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - The RGBA8 image container (immutable / mutable)
//! - [`Rect`] - Rectangle regions in buffer coordinates
//! - [`Rgba`] - A single RGBA8 pixel value
//!
//! Grayscale conversion ([`PixelBuffer::to_grayscale`]) and cropping
//! ([`PixelBuffer::crop`]) live here as buffer methods; geometric
//! transforms are in `pixedit-transform`.

pub mod error;
pub mod pix;
pub mod rect;

pub use color::Rgba;
pub use error::{Error, Result};
pub use pix::{PixelBuffer, PixelBufferMut, PixelDiffResult};
pub use rect::Rect;

/// RGBA8 pixel values and channel helpers.
///
/// # Pixel format
///
/// Pixels are stored as four consecutive bytes in R, G, B, A order.
pub mod color {
    /// Red channel byte offset
    pub const RED: usize = 0;
    /// Green channel byte offset
    pub const GREEN: usize = 1;
    /// Blue channel byte offset
    pub const BLUE: usize = 2;
    /// Alpha channel byte offset
    pub const ALPHA: usize = 3;

    /// Bytes per pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// A single RGBA8 pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Rgba {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Rgba {
        pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
        pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
        pub const RED: Rgba = Rgba::opaque(255, 0, 0);
        pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
        pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
        pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

        /// Compose a pixel from its four channels.
        #[inline]
        pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self { r, g, b, a }
        }

        /// Compose a fully opaque pixel (alpha = 255).
        #[inline]
        pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b, a: 255 }
        }

        /// Channels in storage order.
        #[inline]
        pub const fn to_array(self) -> [u8; 4] {
            [self.r, self.g, self.b, self.a]
        }

        /// Read a pixel from the first four bytes of `bytes`.
        ///
        /// # Panics
        ///
        /// Panics if `bytes` is shorter than four bytes.
        #[inline]
        pub fn from_slice(bytes: &[u8]) -> Self {
            Self {
                r: bytes[RED],
                g: bytes[GREEN],
                b: bytes[BLUE],
                a: bytes[ALPHA],
            }
        }

        /// True when red, green and blue are equal.
        #[inline]
        pub fn is_gray(self) -> bool {
            self.r == self.g && self.g == self.b
        }
    }

    impl From<[u8; 4]> for Rgba {
        fn from(v: [u8; 4]) -> Self {
            Self::new(v[0], v[1], v[2], v[3])
        }
    }

    impl From<Rgba> for [u8; 4] {
        fn from(p: Rgba) -> Self {
            p.to_array()
        }
    }

    /// Truncating average of the three color channels.
    ///
    /// Equivalent to `floor((r + g + b) / 3)`.
    #[inline]
    pub fn channel_average(r: u8, g: u8, b: u8) -> u8 {
        ((r as u32 + g as u32 + b as u32) / 3) as u8
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_channel_average_truncates() {
            assert_eq!(channel_average(0, 0, 0), 0);
            assert_eq!(channel_average(255, 255, 255), 255);
            // 1 + 1 + 0 = 2, 2 / 3 = 0.67 -> 0
            assert_eq!(channel_average(1, 1, 0), 0);
            // 255 + 0 + 0 = 255 -> 85
            assert_eq!(channel_average(255, 0, 0), 85);
            // 10 + 20 + 31 = 61 -> 20.33 -> 20
            assert_eq!(channel_average(10, 20, 31), 20);
        }

        #[test]
        fn test_rgba_array_conversion() {
            let p = Rgba::new(1, 2, 3, 4);
            assert_eq!(p.to_array(), [1, 2, 3, 4]);
            assert_eq!(Rgba::from([1, 2, 3, 4]), p);
            assert_eq!(Rgba::from_slice(&[9, 8, 7, 6, 5]), Rgba::new(9, 8, 7, 6));
        }

        #[test]
        fn test_rgba_constants() {
            assert_eq!(Rgba::RED, Rgba::new(255, 0, 0, 255));
            assert_eq!(Rgba::TRANSPARENT.a, 0);
            assert!(Rgba::WHITE.is_gray());
            assert!(!Rgba::GREEN.is_gray());
        }
    }
}
