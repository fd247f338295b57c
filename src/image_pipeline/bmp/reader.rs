use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bmp::types::RawImageBuffer;

pub trait BitmapReader {
    fn read_bitmap(&self, path: &Path) -> Result<RawImageBuffer>;
}
