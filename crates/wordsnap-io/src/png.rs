//! PNG image format support
//!
//! Buffers are written as 8-bit grayscale. Reading accepts any PNG; palette
//! and low-bit-depth images are expanded, 16-bit samples keep their high
//! byte, color is reduced to luma and alpha is dropped.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
use wordsnap_core::{GrayBuffer, Rect};

/// ITU-R BT.601 luma, integer weights summing to 1000.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let bytes_per_sample = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
    let channels = match color_type {
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

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let stride = output_info.line_size;
    let pixel_bytes = channels * bytes_per_sample;
    if stride < width as usize * pixel_bytes {
        return Err(IoError::InvalidData(format!(
            "PNG line size {} too small for width {}",
            stride, width
        )));
    }

    // High byte of each sample is the first one (PNG is big-endian)
    let sample = |row: &[u8], x: usize, c: usize| row[x * pixel_bytes + c * bytes_per_sample];

    let mut out = GrayBuffer::new(width, height)?;
    for y in 0..height as usize {
        let row = &buf[y * stride..(y + 1) * stride];
        let dst = &mut out.data_mut()[y * width as usize..(y + 1) * width as usize];
        for (x, d) in dst.iter_mut().enumerate() {
            *d = match channels {
                1 | 2 => sample(row, x, 0),
                _ => luma(sample(row, x, 0), sample(row, x, 1), sample(row, x, 2)),
            };
        }
    }

    Ok(out)
}

/// Write a buffer as an 8-bit grayscale PNG
pub fn write_png<W: Write>(buf: &GrayBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(buf.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

/// Encode a buffer, or a region of it, to PNG bytes in memory.
///
/// # Errors
///
/// A region that is empty or out of bounds is reported as [`IoError::Core`].
pub fn encode_png(buf: &GrayBuffer, region: Option<&Rect>) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match region {
        Some(r) => write_png(&buf.crop(r)?, &mut bytes)?,
        None => write_png(buf, &mut bytes)?,
    }
    Ok(bytes)
}

/// Read a PNG file from disk
pub fn read_png_file<P: AsRef<Path>>(path: P) -> IoResult<GrayBuffer> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a buffer to a PNG file on disk
pub fn write_png_file<P: AsRef<Path>>(buf: &GrayBuffer, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(buf, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let buf = GrayBuffer::from_fn(10, 10, |x, y| ((x + y) * 10) as u8).unwrap();

        let mut bytes = Vec::new();
        write_png(&buf, &mut bytes).unwrap();
        let buf2 = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(buf2.dimensions(), (10, 10));
        assert_eq!(buf2, buf);
    }

    #[test]
    fn test_read_rgb_reduces_to_luma() {
        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[255, 255, 255, 0, 0, 0])
                .unwrap();
        }
        let buf = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(buf.data(), &[255, 0]);
    }

    #[test]
    fn test_encode_region() {
        let buf = GrayBuffer::from_fn(8, 6, |x, y| (y * 8 + x) as u8).unwrap();
        let r = Rect::new(2, 1, 5, 4).unwrap();
        let bytes = encode_png(&buf, Some(&r)).unwrap();
        let word = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(word, buf.crop(&r).unwrap());

        let bad = Rect::new(6, 0, 9, 2).unwrap();
        assert!(matches!(encode_png(&buf, Some(&bad)), Err(IoError::Core(_))));
    }

    #[test]
    fn test_read_garbage_fails() {
        let result = read_png(Cursor::new(vec![1u8, 2, 3, 4]));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
