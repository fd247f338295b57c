use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bmp::types::RawImageBuffer;

pub trait BitmapWriter {
    fn write_bitmap(&self, image: &RawImageBuffer, output: &mut dyn Write) -> Result<()>;
}
