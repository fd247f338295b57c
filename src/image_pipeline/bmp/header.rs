//! Bitmap file header model and validation.
//!
//! The file header is the fixed 14-byte prefix of every bitmap:
//!
//! | Offset | Size | Field               |
//! |--------|------|---------------------|
//! | 0      | 2    | signature (`BM`)    |
//! | 2      | 4    | file size           |
//! | 6      | 2    | reserved 1          |
//! | 8      | 2    | reserved 2          |
//! | 10     | 4    | pixel data offset   |
//!
//! All multi-byte fields are little-endian and are decoded byte-by-byte, so
//! host endianness and struct layout never matter.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Size of the file header in bytes.
pub const FILE_HEADER_LEN: usize = 14;

/// ASCII "BM".
pub const BMP_SIGNATURE: [u8; 2] = [0x42, 0x4D];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_data_offset: u32,
}

fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from(bytes[offset]) | u16::from(bytes[offset + 1]) << 8
}

fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from(bytes[offset])
        | u32::from(bytes[offset + 1]) << 8
        | u32::from(bytes[offset + 2]) << 16
        | u32::from(bytes[offset + 3]) << 24
}

impl FileHeader {
    /// Decodes the header fields from the start of `bytes`.
    ///
    /// Only the length is checked here. Use [`FileHeader::validate`] to check
    /// the field values.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < FILE_HEADER_LEN {
            return Err(ConversionError::FormatError(format!(
                "truncated header: {} of {} bytes",
                bytes.len(),
                FILE_HEADER_LEN
            )));
        }

        Ok(Self {
            signature: [bytes[0], bytes[1]],
            file_size: read_u32_le(bytes, 2),
            reserved1: read_u16_le(bytes, 6),
            reserved2: read_u16_le(bytes, 8),
            pixel_data_offset: read_u32_le(bytes, 10),
        })
    }

    pub fn check_signature(&self) -> Result<()> {
        if self.signature != BMP_SIGNATURE {
            return Err(ConversionError::FormatError(format!(
                "bad signature: {:#04x} {:#04x}",
                self.signature[0], self.signature[1]
            )));
        }
        Ok(())
    }

    /// Cross-checks the declared size against the measured file length.
    /// Catches truncated and concatenated files that still carry a valid
    /// signature.
    pub fn check_declared_size(&self, actual_len: u64) -> Result<()> {
        if u64::from(self.file_size) != actual_len {
            return Err(ConversionError::FormatError(format!(
                "size mismatch: header declares {} bytes, file has {}",
                self.file_size, actual_len
            )));
        }
        Ok(())
    }

    pub fn check_pixel_data_offset(&self) -> Result<()> {
        if self.pixel_data_offset > self.file_size {
            return Err(ConversionError::FormatError(format!(
                "pixel data offset out of range: {} > {}",
                self.pixel_data_offset, self.file_size
            )));
        }
        Ok(())
    }

    /// Runs every check, stopping at the first failure.
    pub fn validate(&self, actual_len: u64) -> Result<()> {
        self.check_signature()?;
        self.check_declared_size(actual_len)?;
        self.check_pixel_data_offset()?;

        debug!(
            file_size = self.file_size,
            pixel_data_offset = self.pixel_data_offset,
            "Bitmap header valid"
        );
        Ok(())
    }

    pub fn pixel_data_start(&self) -> usize {
        self.pixel_data_offset as usize
    }
}
