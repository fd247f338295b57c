use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bmp::types::RawImageBuffer;
use crate::image_pipeline::bmp::writer::BitmapWriter;

/// Writes the buffer back out byte-for-byte, header and gap bytes included.
pub struct StandardBitmapWriter;

impl BitmapWriter for StandardBitmapWriter {
    fn write_bitmap(&self, image: &RawImageBuffer, output: &mut dyn Write) -> Result<()> {
        debug!("Writing bitmap, {} bytes", image.data.len());

        output.write_all(&image.data)?;
        output.flush()?;

        debug!("Bitmap write complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_buffer_verbatim() {
        let image = RawImageBuffer::from_bytes(vec![0x42, 0x4D, 1, 2, 3]);
        let mut output = Vec::new();

        StandardBitmapWriter.write_bitmap(&image, &mut output).unwrap();

        assert_eq!(output, image.data);
    }
}
