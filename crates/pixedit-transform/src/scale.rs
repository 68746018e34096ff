//! Image scaling
//!
//! Uniform nearest-neighbor scaling. Each output pixel copies exactly one
//! source pixel, so no new colors are introduced and alpha is preserved.

use crate::{TransformError, TransformResult};
use pixedit_core::PixelBuffer;
use pixedit_core::color::BYTES_PER_PIXEL;

/// Largest output, in pixels, that scaling will allocate (2 GiB of RGBA8)
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 29;

/// Rounding rule for the scaled output dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Ties round away from zero (2.5 -> 3)
    #[default]
    HalfAwayFromZero,
    /// Ties round to the nearest even integer (2.5 -> 2)
    HalfEven,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => value.round(),
            Rounding::HalfEven => value.round_ties_even(),
        }
    }
}

/// Options for scaling operations
#[derive(Debug, Clone, Default)]
pub struct ScaleOptions {
    /// How `dimension * ratio` is rounded to whole pixels
    pub rounding: Rounding,
}

impl ScaleOptions {
    /// Create options with a specific rounding rule
    pub fn with_rounding(rounding: Rounding) -> Self {
        Self { rounding }
    }
}

/// Scale an image by `ratio` using nearest-neighbor sampling
///
/// Uses [`ScaleOptions::default`].
///
/// # Arguments
/// * `pix` - Input image
/// * `ratio` - Uniform scale factor (e.g., 2.0 = double width and height)
pub fn scale(pix: &PixelBuffer, ratio: f64) -> TransformResult<PixelBuffer> {
    scale_with_options(pix, ratio, &ScaleOptions::default())
}

/// Scale an image by `ratio` with explicit options
///
/// Output pixel `(x, y)` copies source pixel
/// `(min(floor(x / ratio), w - 1), min(floor(y / ratio), h - 1))`.
/// A ratio small enough to round a dimension down to zero yields an empty
/// buffer.
///
/// # Errors
///
/// Returns [`TransformError::InvalidRatio`] if `ratio` is NaN, infinite,
/// zero or negative, and [`TransformError::OutputTooLarge`] if the scaled
/// image would exceed [`MAX_OUTPUT_PIXELS`].
pub fn scale_with_options(
    pix: &PixelBuffer,
    ratio: f64,
    options: &ScaleOptions,
) -> TransformResult<PixelBuffer> {
    let (out_w, out_h) = scaled_dimensions(pix.width(), pix.height(), ratio, options.rounding)?;

    if ratio == 1.0 {
        return Ok(pix.deep_clone());
    }

    let mut out = PixelBuffer::new(out_w, out_h)?
        .try_into_mut()
        .unwrap_or_else(|shared| shared.to_mut());
    if out_w == 0 || out_h == 0 {
        return Ok(out.into());
    }

    let xmap = source_indices(out_w, pix.width(), ratio);
    let ymap = source_indices(out_h, pix.height(), ratio);

    for (y, &sy) in ymap.iter().enumerate() {
        let src = pix.row_data(sy);
        let dst = out.row_data_mut(y as u32);
        for (d, &sx) in dst.chunks_exact_mut(BYTES_PER_PIXEL).zip(&xmap) {
            let start = sx as usize * BYTES_PER_PIXEL;
            d.copy_from_slice(&src[start..start + BYTES_PER_PIXEL]);
        }
    }

    Ok(out.into())
}

/// Compute the output size of scaling a `width x height` image by `ratio`
///
/// # Errors
///
/// Same as [`scale_with_options`].
pub fn scaled_dimensions(
    width: u32,
    height: u32,
    ratio: f64,
    rounding: Rounding,
) -> TransformResult<(u32, u32)> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(TransformError::InvalidRatio(ratio));
    }

    let fw = rounding.apply(width as f64 * ratio);
    let fh = rounding.apply(height as f64 * ratio);
    if fw > u32::MAX as f64 || fh > u32::MAX as f64 || fw * fh > MAX_OUTPUT_PIXELS as f64 {
        return Err(TransformError::OutputTooLarge {
            width: fw,
            height: fh,
        });
    }

    Ok((fw as u32, fh as u32))
}

/// Map each output coordinate along one axis to its source coordinate.
fn source_indices(out_len: u32, src_len: u32, ratio: f64) -> Vec<u32> {
    let max = src_len.saturating_sub(1);
    (0..out_len)
        .map(|i| {
            let s = (i as f64 / ratio).floor();
            if s >= max as f64 { max } else { s as u32 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixedit_core::Rgba;

    #[test]
    fn test_scaled_dimensions_rounding() {
        // 5 * 0.5 = 2.5 is a tie
        assert_eq!(
            scaled_dimensions(5, 4, 0.5, Rounding::HalfAwayFromZero).unwrap(),
            (3, 2)
        );
        assert_eq!(
            scaled_dimensions(5, 4, 0.5, Rounding::HalfEven).unwrap(),
            (2, 2)
        );
        assert_eq!(
            scaled_dimensions(7, 3, 1.5, Rounding::HalfAwayFromZero).unwrap(),
            (11, 5)
        );
    }

    #[test]
    fn test_invalid_ratio() {
        let pix = PixelBuffer::new(4, 4).unwrap();
        for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                scale(&pix, ratio),
                Err(TransformError::InvalidRatio(_))
            ));
        }
    }

    #[test]
    fn test_output_too_large() {
        let pix = PixelBuffer::new(2, 2).unwrap();
        assert!(matches!(
            scale(&pix, 1e10),
            Err(TransformError::OutputTooLarge { .. })
        ));
    }

    #[test]
    fn test_output_pixel_limit() {
        // Each side fits in u32 but the area does not fit in memory
        let pix = PixelBuffer::new(4, 4).unwrap();
        assert!(matches!(
            scale(&pix, 1e6),
            Err(TransformError::OutputTooLarge { .. })
        ));
        // A thin strip at the limit is still accepted
        assert_eq!(
            scaled_dimensions(1, 1 << 29, 1.0, Rounding::HalfAwayFromZero).unwrap(),
            (1, 1 << 29)
        );
    }

    #[test]
    fn test_upscale_single_pixel() {
        let color = Rgba::new(10, 20, 30, 40);
        let pix = PixelBuffer::filled(1, 1, color).unwrap();
        let scaled = scale(&pix, 2.0).unwrap();
        assert_eq!(scaled.dimensions(), (2, 2));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(scaled.get_pixel(x, y).unwrap(), color);
            }
        }
    }

    #[test]
    fn test_downscale_picks_top_left() {
        let mut pix = PixelBuffer::new(2, 2).unwrap().to_mut();
        pix.set_pixel(0, 0, Rgba::RED).unwrap();
        pix.set_pixel(1, 0, Rgba::GREEN).unwrap();
        pix.set_pixel(0, 1, Rgba::BLUE).unwrap();
        pix.set_pixel(1, 1, Rgba::WHITE).unwrap();
        let pix: PixelBuffer = pix.into();

        let scaled = scale(&pix, 0.5).unwrap();
        assert_eq!(scaled.dimensions(), (1, 1));
        assert_eq!(scaled.get_pixel(0, 0).unwrap(), Rgba::RED);
    }

    #[test]
    fn test_tiny_ratio_gives_empty() {
        let pix = PixelBuffer::new(3, 3).unwrap();
        let scaled = scale(&pix, 0.1).unwrap();
        assert_eq!(scaled.dimensions(), (0, 0));
        assert!(scaled.data().is_empty());
    }

    #[test]
    fn test_source_indices_clamped() {
        // 3 * 1.5 = 4.5 -> 5 output columns over 3 source columns
        assert_eq!(source_indices(5, 3, 1.5), vec![0, 0, 1, 2, 2]);
    }
}
