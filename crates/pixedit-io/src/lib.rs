//! pixedit-io - Image decoding and encoding
//!
//! The codec side of the editor: it turns file bytes into an RGBA8
//! [`PixelBuffer`] for the editing core, and turns the edited buffer back
//! into PNG bytes for saving.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |---|---|---|---|
//! | PNG | yes | yes | `png-format` (default) |
//! | JPEG | yes | no | `jpeg` (default) |

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use pixedit_core::PixelBuffer;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// File name suggested when saving an edited image.
pub const DEFAULT_SAVE_NAME: &str = "edited-image.png";

/// Decode an in-memory image file to an RGBA8 buffer.
///
/// The format is detected from the leading magic bytes.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the format is unknown or its
/// feature is disabled, or a decode error if the data is corrupt.
pub fn decode(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    let pix = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data))?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data)?,
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} support is not enabled",
                other
            )));
        }
    };
    log::debug!(
        "decoded {:?} image: {}x{} ({} bytes)",
        format,
        pix.width(),
        pix.height(),
        data.len()
    );
    Ok(pix)
}

/// Encode a buffer as an 8-bit RGBA PNG.
#[cfg(feature = "png-format")]
pub fn encode_png(pix: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    png::write_png(pix, &mut out)?;
    log::debug!(
        "encoded {}x{} image as PNG ({} bytes)",
        pix.width(),
        pix.height(),
        out.len()
    );
    Ok(out)
}

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let data = fs::read(path.as_ref())?;
    decode(&data)
}

/// Write an image to a file path as PNG.
///
/// A missing extension is accepted; any extension other than `.png` is
/// rejected since PNG is the only output format.
#[cfg(feature = "png-format")]
pub fn write_image<P: AsRef<Path>>(pix: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if path.extension().is_some() && ImageFormat::from_path(path) != Some(ImageFormat::Png) {
        return Err(IoError::UnsupportedFormat(format!(
            "cannot write {}: only PNG output is supported",
            path.display()
        )));
    }
    let data = encode_png(pix)?;
    fs::write(path, data)?;
    Ok(())
}
