//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale and RGB
//! images are decoded to opaque RGBA8. JPEG is read-only: edited images
//! are always saved as PNG.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use pixedit_core::PixelBuffer;
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for CMYK and 16-bit JPEGs.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let npix = width as usize * height as usize;
    let mut rgba = Vec::with_capacity(npix * 4);

    match info.pixel_format {
        PixelFormat::L8 => {
            for &g in pixels.iter().take(npix) {
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        PixelFormat::RGB24 => {
            for px in pixels.chunks_exact(3).take(npix) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    }

    Ok(PixelBuffer::from_raw(width, height, rgba)?)
}
