//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! or from a file name extension when choosing how to save.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file formats understood by the codec adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// PNG format (the only format written)
    #[default]
    Png,
    /// JFIF JPEG format (read only)
    Jpeg,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Map a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Map a path's extension to a format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 3 {
        return Err(IoError::InvalidData("not enough data to detect format".to_string()));
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    Err(IoError::UnsupportedFormat("unknown image format".to_string()))
}
