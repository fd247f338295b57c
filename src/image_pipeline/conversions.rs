//! Pipeline conversions module
//!
//! This module contains orchestration logic for bitmap grayscale conversion.

mod bmp_to_grayscale;
mod naming;


pub use bmp_to_grayscale::BmpToGrayscalePipeline;
pub use naming::output_file_name;
