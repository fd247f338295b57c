//! Bitmap buffer types

/// The complete byte content of a bitmap file, loaded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageBuffer {
    /// Every byte of the file, header included
    pub data: Vec<u8>,
    /// Length of the file as measured on disk, independent of the header
    pub file_len: u64,
}

impl RawImageBuffer {
    /// Wraps bytes that did not come from disk. The measured length is the
    /// buffer length.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let file_len = data.len() as u64;
        Self { data, file_len }
    }
}
