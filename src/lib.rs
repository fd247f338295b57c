//! Grayscale conversion for uncompressed 24-bit bitmap files.

pub mod cli;
pub mod image_pipeline;
pub mod logger;
