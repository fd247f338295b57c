//! Bitmap reader backed by the local filesystem.
//!
//! The file length is taken from the file's metadata before reading, so the
//! header's declared size can later be checked against a value that does not
//! come from the header itself.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::bmp::types::RawImageBuffer;
use crate::image_pipeline::bmp::reader::BitmapReader;

pub struct FsBitmapReader;

impl BitmapReader for FsBitmapReader {
    /// Loads the whole file into memory.
    ///
    /// # Errors
    ///
    /// * `ConversionError::InputReadError` - the path does not exist, is not
    ///   readable, or the read came up short of the measured length
    fn read_bitmap(&self, path: &Path) -> Result<RawImageBuffer> {
        let input_err = |e: std::io::Error| {
            ConversionError::InputReadError(format!("{}: {}", path.display(), e))
        };

        let mut file = File::open(path).map_err(input_err)?;
        let file_len = file.metadata().map_err(input_err)?.len();
        debug!("Reading bitmap {}, {} bytes on disk", path.display(), file_len);

        let mut data = Vec::with_capacity(file_len as usize);
        file.read_to_end(&mut data).map_err(input_err)?;

        // The file changed between stat and read.
        if data.len() as u64 != file_len {
            return Err(ConversionError::InputReadError(format!(
                "{}: read {} bytes, expected {}",
                path.display(),
                data.len(),
                file_len
            )));
        }

        Ok(RawImageBuffer { data, file_len })
    }
}
