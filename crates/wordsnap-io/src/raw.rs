//! Raw `.gray` sample files
//!
//! A `.gray` file is just the buffer samples in row-major order with no
//! header; the dimensions travel out of band (usually in the file name).

use crate::IoResult;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use wordsnap_core::GrayBuffer;

/// Write the raw samples of a buffer
pub fn write_gray<W: Write>(buf: &GrayBuffer, mut writer: W) -> IoResult<()> {
    writer.write_all(buf.data())?;
    Ok(())
}

/// Read raw samples for a `width x height` buffer.
///
/// Trailing bytes past `width * height` are ignored, so a full camera
/// frame (luma followed by chroma) can be read directly.
pub fn read_gray<R: Read>(mut reader: R, width: u32, height: u32) -> IoResult<GrayBuffer> {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    reader.read_to_end(&mut data)?;
    Ok(GrayBuffer::from_bytes(data, width, height)?)
}

/// Write a buffer to a `.gray` file on disk
pub fn write_gray_file<P: AsRef<Path>>(buf: &GrayBuffer, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_gray(buf, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a `.gray` file from disk
pub fn read_gray_file<P: AsRef<Path>>(path: P, width: u32, height: u32) -> IoResult<GrayBuffer> {
    read_gray(File::open(path)?, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IoError;
    use std::io::Cursor;

    #[test]
    fn test_raw_roundtrip() {
        let buf = GrayBuffer::from_fn(5, 4, |x, y| (x * 50 + y) as u8).unwrap();
        let mut bytes = Vec::new();
        write_gray(&buf, &mut bytes).unwrap();
        assert_eq!(bytes.len(), 20);
        assert_eq!(read_gray(Cursor::new(bytes), 5, 4).unwrap(), buf);
    }

    #[test]
    fn test_raw_short_data() {
        let err = read_gray(Cursor::new(vec![0u8; 10]), 5, 4).unwrap_err();
        match err {
            IoError::Core(e) => assert!(e.is_size_error()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
