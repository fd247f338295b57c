//! Grayscale formulas.
//!
//! Each function maps one pixel to a single intensity byte. Results are
//! truncated, never rounded, so output matches the reference converter
//! bit-for-bit.

use crate::image_pipeline::grayscale::types::Pixel;

/// `(max(R,G,B) + min(R,G,B)) / 2`
pub fn lightness(pixel: Pixel) -> u8 {
    let Pixel { red, green, blue } = pixel;
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    ((u16::from(max) + u16::from(min)) / 2) as u8
}

/// `(R + G + B) / 3`
pub fn average(pixel: Pixel) -> u8 {
    let sum = u16::from(pixel.red) + u16::from(pixel.green) + u16::from(pixel.blue);
    (sum / 3) as u8
}

/// `0.21*R + 0.72*G + 0.07*B`
///
/// The weights sum to 1.0 only approximately in f64, so a gray pixel
/// `(v, v, v)` can come out as `v - 1` after truncation.
pub fn luminosity(pixel: Pixel) -> u8 {
    let r = 0.21 * f64::from(pixel.red);
    let g = 0.72 * f64::from(pixel.green);
    let b = 0.07 * f64::from(pixel.blue);
    (r + g + b) as u8
}
