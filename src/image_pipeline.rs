//! Image processing pipeline module
//!
//! This module provides a structured approach to bitmap grayscale conversion,
//! with separate modules for bitmap reading and writing, grayscale formulas,
//! and conversion orchestration.

pub mod bmp;
pub mod grayscale;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use bmp::{
    FileHeader,
    RawImageBuffer,
    BitmapReader,
    BitmapWriter,
    FsBitmapReader,
    StandardBitmapWriter,
};

pub use grayscale::{
    ConversionConfig,
    ConversionConfigBuilder,
    ConversionMethod,
    Pixel,
    TranscodeStats,
};

pub use conversions::{
    BmpToGrayscalePipeline,
    output_file_name,
};
