//! Synthetic test images
//!
//! Deterministic buffers built in code, so tests do not depend on image
//! files checked into the repository.

use pixedit_core::{PixelBuffer, Rgba};

/// A buffer where every pixel encodes its own coordinates.
///
/// Pixel `(x, y)` is `(x, y, x ^ y, 255 - x)` (channels truncated to u8),
/// which makes misplaced pixels easy to spot in transform tests.
pub fn numbered(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h).expect("fixture size").to_mut();
    for y in 0..h {
        for x in 0..w {
            let px = Rgba::new(x as u8, y as u8, (x ^ y) as u8, 255 - x as u8);
            buf.set_pixel_unchecked(x, y, px);
        }
    }
    buf.into()
}

/// A horizontal color gradient with a vertical alpha ramp.
pub fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h).expect("fixture size").to_mut();
    let wd = w.saturating_sub(1).max(1);
    let hd = h.saturating_sub(1).max(1);
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / wd) as u8;
            let g = 255 - r;
            let b = ((x + y) * 255 / (wd + hd)) as u8;
            let a = (255 - y * 200 / hd) as u8;
            buf.set_pixel_unchecked(x, y, Rgba::new(r, g, b, a));
        }
    }
    buf.into()
}

/// A checkerboard of `cell` x `cell` squares alternating `a` and `b`.
pub fn checker(w: u32, h: u32, cell: u32, a: Rgba, b: Rgba) -> PixelBuffer {
    let cell = cell.max(1);
    let mut buf = PixelBuffer::new(w, h).expect("fixture size").to_mut();
    for y in 0..h {
        for x in 0..w {
            let px = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            buf.set_pixel_unchecked(x, y, px);
        }
    }
    buf.into()
}

/// Build a buffer from rows of pixels, top row first.
///
/// # Panics
///
/// Panics if the rows have different lengths.
pub fn from_rows(rows: &[&[Rgba]]) -> PixelBuffer {
    let h = rows.len() as u32;
    let w = rows.first().map_or(0, |r| r.len()) as u32;
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for row in rows {
        assert_eq!(row.len() as u32, w, "ragged fixture rows");
        for px in row.iter() {
            data.extend_from_slice(&px.to_array());
        }
    }
    PixelBuffer::from_raw(w, h, data).expect("fixture size")
}
