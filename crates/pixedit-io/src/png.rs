//! PNG image format support
//!
//! Every PNG color type is decoded to RGBA8. The decoder expands palettes
//! (including `tRNS` transparency) and sub-byte grayscale, and strips
//! 16-bit samples down to their high byte. Writing always produces an
//! 8-bit RGBA PNG so that alpha survives a save.

use crate::{IoError, IoResult};
use pixedit_core::PixelBuffer;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);

    for y in 0..height as usize {
        let row_start = y * bytes_per_row;
        let row = &data[row_start..row_start + width as usize * samples];
        for px in row.chunks_exact(samples) {
            let out = match samples {
                1 => [px[0], px[0], px[0], 255],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 255],
                _ => [px[0], px[1], px[2], px[3]],
            };
            rgba.extend_from_slice(&out);
        }
    }

    Ok(PixelBuffer::from_raw(width, height, rgba)?)
}

/// Write a PNG image
///
/// # Errors
///
/// Returns [`IoError::EmptyImage`] for buffers with no pixels, which PNG
/// cannot represent.
pub fn write_png<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    let (width, height) = pix.dimensions();
    if pix.is_empty() {
        return Err(IoError::EmptyImage { width, height });
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Rows are tightly packed RGBA8, which is exactly PNG's layout
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixedit_core::Rgba;
    use std::io::Cursor;

    fn encode_raw(
        width: u32,
        height: u32,
        color: ColorType,
        depth: BitDepth,
        data: &[u8],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut pix = PixelBuffer::new(5, 3).unwrap().to_mut();
        pix.set_pixel(0, 0, Rgba::new(255, 0, 0, 255)).unwrap();
        pix.set_pixel(1, 1, Rgba::new(0, 255, 0, 128)).unwrap();
        pix.set_pixel(4, 2, Rgba::new(1, 2, 3, 0)).unwrap();
        let pix: PixelBuffer = pix.into();

        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();
        let pix2 = read_png(Cursor::new(buffer)).unwrap();

        assert!(pix2.equals(&pix));
    }

    #[test]
    fn test_read_grayscale_is_opaque_gray() {
        let bytes = encode_raw(2, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 200]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_pixel(0, 0).unwrap(), Rgba::new(0, 0, 0, 255));
        assert_eq!(pix.get_pixel(1, 0).unwrap(), Rgba::new(200, 200, 200, 255));
    }

    #[test]
    fn test_read_gray_alpha() {
        let bytes = encode_raw(1, 1, ColorType::GrayscaleAlpha, BitDepth::Eight, &[90, 40]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_pixel(0, 0).unwrap(), Rgba::new(90, 90, 90, 40));
    }

    #[test]
    fn test_read_rgb() {
        let bytes = encode_raw(2, 1, ColorType::Rgb, BitDepth::Eight, &[1, 2, 3, 4, 5, 6]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_pixel(1, 0).unwrap(), Rgba::new(4, 5, 6, 255));
    }

    #[test]
    fn test_read_16bit_keeps_high_byte() {
        let data = [0xAB, 0x01, 0xCD, 0x02, 0xEF, 0x03];
        let bytes = encode_raw(1, 1, ColorType::Rgb, BitDepth::Sixteen, &data);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(
            pix.get_pixel(0, 0).unwrap(),
            Rgba::new(0xAB, 0xCD, 0xEF, 255)
        );
    }

    #[test]
    fn test_read_indexed_expands_palette() {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, 2, 1);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(vec![10, 20, 30, 40, 50, 60]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 0]).unwrap();
        }
        let pix = read_png(Cursor::new(out)).unwrap();
        assert_eq!(pix.get_pixel(0, 0).unwrap(), Rgba::new(40, 50, 60, 255));
        assert_eq!(pix.get_pixel(1, 0).unwrap(), Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn test_write_empty_rejected() {
        let pix = PixelBuffer::new(0, 4).unwrap();
        let mut buffer = Vec::new();
        assert!(matches!(
            write_png(&pix, &mut buffer),
            Err(IoError::EmptyImage {
                width: 0,
                height: 4
            })
        ));
    }

    #[test]
    fn test_read_garbage() {
        let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
        assert!(matches!(
            read_png(Cursor::new(bytes)),
            Err(IoError::DecodeError(_))
        ));
    }
}
