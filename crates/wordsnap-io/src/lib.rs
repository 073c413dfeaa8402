//! wordsnap-io - Buffer I/O for WordSnap
//!
//! - PNG encode/decode of [`GrayBuffer`](wordsnap_core::GrayBuffer)s,
//!   used to submit word crops to an OCR service
//! - Raw headerless `.gray` sample files
//! - Debug dump collaborators ([`DebugDump`], [`FileDumper`], [`NoDump`])

pub mod dump;
mod error;
pub mod png;
pub mod raw;

pub use dump::{DebugDump, DumpFormat, FileDumper, NoDump};
pub use error::{IoError, IoResult};
pub use self::png::{encode_png, read_png, read_png_file, write_png, write_png_file};
pub use self::raw::{read_gray, read_gray_file, write_gray, write_gray_file};
