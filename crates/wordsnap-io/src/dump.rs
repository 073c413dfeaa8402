//! Debug dumps of intermediate buffers
//!
//! A [`DebugDump`] observes labeled buffers as they pass through the
//! pipeline. It never returns anything to the caller: failures are logged
//! and dropped.

use crate::{IoResult, png, raw};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use wordsnap_core::GrayBuffer;

/// Receiver for labeled intermediate buffers
pub trait DebugDump {
    /// Persist or otherwise observe `buf` under `label`.
    fn dump(&self, label: &str, buf: &GrayBuffer);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDump;

impl DebugDump for NoDump {
    fn dump(&self, _label: &str, _buf: &GrayBuffer) {}
}

/// On-disk format used by [`FileDumper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// Headerless samples, `.gray`
    #[default]
    Raw,
    /// 8-bit grayscale PNG, `.png`
    Png,
}

impl DumpFormat {
    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            DumpFormat::Raw => "gray",
            DumpFormat::Png => "png",
        }
    }
}

/// Writes each dumped buffer to `<dir>/<label><seq>.<ext>`
///
/// The sequence number is shared across labels and increases with every
/// dump, so files sort in pipeline order.
#[derive(Debug)]
pub struct FileDumper {
    dir: PathBuf,
    format: DumpFormat,
    seq: AtomicU64,
}

impl FileDumper {
    /// Create a dumper, creating `dir` if it does not exist.
    pub fn new<P: AsRef<Path>>(dir: P, format: DumpFormat) -> IoResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            format,
            seq: AtomicU64::new(0),
        })
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of dumps attempted so far
    pub fn count(&self) -> u64 {
        self.seq.load(Ordering::Relaxed)
    }

    fn write(&self, path: &Path, buf: &GrayBuffer) -> IoResult<()> {
        match self.format {
            DumpFormat::Raw => raw::write_gray_file(buf, path),
            DumpFormat::Png => png::write_png_file(buf, path),
        }
    }
}

impl DebugDump for FileDumper {
    fn dump(&self, label: &str, buf: &GrayBuffer) {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let path = self
            .dir
            .join(format!("{}{}.{}", label, seq, self.format.extension()));
        match self.write(&path, buf) {
            Ok(()) => log::debug!(
                "dumped {} ({}x{}) to {}",
                label,
                buf.width(),
                buf.height(),
                path.display()
            ),
            Err(e) => log::warn!("debug dump of {} failed: {}", label, e),
        }
    }
}

impl<D: DebugDump + ?Sized> DebugDump for &D {
    fn dump(&self, label: &str, buf: &GrayBuffer) {
        (**self).dump(label, buf)
    }
}
