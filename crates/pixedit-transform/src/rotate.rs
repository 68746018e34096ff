//! Orthogonal rotations
//!
//! Quarter-turn rotations move pixels without resampling, so every source
//! pixel appears exactly once in the output.

use crate::TransformResult;
use pixedit_core::{PixelBuffer, PixelBufferMut};

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `pix` - Input image
/// * `quads` - Number of 90-degree clockwise rotations; taken modulo 4
///
/// # Returns
/// The rotated image. `quads % 4 == 0` returns an independent copy.
pub fn rotate_orth(pix: &PixelBuffer, quads: u32) -> TransformResult<PixelBuffer> {
    match quads % 4 {
        0 => Ok(pix.deep_clone()),
        1 => rotate_90(pix, true),
        2 => rotate_180(pix),
        _ => rotate_90(pix, false),
    }
}

/// Rotate an image 90 degrees
///
/// The output is `height x width`. Clockwise, the top edge of the input
/// becomes the right edge of the output: a 2x1 image `[Red, Green]` turns
/// into a 1x2 image with Red on top and Green below.
///
/// # Arguments
/// * `pix` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(pix: &PixelBuffer, clockwise: bool) -> TransformResult<PixelBuffer> {
    let w = pix.width();
    let h = pix.height();

    // Output dimensions are swapped
    let mut out_mut = blank(h, w)?;
    rotate_90_impl(pix, &mut out_mut, clockwise, w, h);

    Ok(out_mut.into())
}

fn rotate_90_impl(src: &PixelBuffer, dst: &mut PixelBufferMut, clockwise: bool, w: u32, h: u32) {
    for y in 0..h {
        for x in 0..w {
            let val = src.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            dst.set_pixel_unchecked(nx, ny, val);
        }
    }
}

/// Rotate an image 180 degrees
pub fn rotate_180(pix: &PixelBuffer) -> TransformResult<PixelBuffer> {
    let w = pix.width();
    let h = pix.height();

    let mut out_mut = blank(w, h)?;
    for y in 0..h {
        let src = pix.row_data(y);
        let dst = out_mut.row_data_mut(h - 1 - y);
        // Reversing whole pixels keeps each RGBA quadruple in order
        for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4).rev()) {
            d.copy_from_slice(s);
        }
    }

    Ok(out_mut.into())
}

fn blank(width: u32, height: u32) -> TransformResult<PixelBufferMut> {
    let pix = PixelBuffer::new(width, height)?;
    Ok(pix.try_into_mut().unwrap_or_else(|shared| shared.to_mut()))
}
