//! Bitmap file module
//!
//! This module provides the bitmap file header model, whole-file loading and
//! verbatim writing of bitmap buffers.

mod reader;
mod writer;
mod fs_reader;
mod standard_bmp_writer;
pub mod header;
pub mod types;

pub use reader::BitmapReader;
pub use writer::BitmapWriter;
pub use fs_reader::FsBitmapReader;
pub use standard_bmp_writer::StandardBitmapWriter;
pub use header::{FileHeader, FILE_HEADER_LEN, BMP_SIGNATURE};
pub use types::RawImageBuffer;
