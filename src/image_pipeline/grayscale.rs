//! Grayscale conversion module
//!
//! This module provides the grayscale formulas, the method selector and the
//! in-place pixel transcoder.

pub mod codec;
pub mod types;
mod transcode;

pub use types::{ConversionConfig, ConversionConfigBuilder, ConversionMethod, Pixel};
pub use transcode::{transcode_pixels, TranscodeStats, BYTES_PER_PIXEL};
