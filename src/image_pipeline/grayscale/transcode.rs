use tracing::{debug, warn};

use crate::image_pipeline::grayscale::types::{ConversionMethod, Pixel};

/// Bytes per 24-bit pixel.
pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// Complete pixel groups rewritten
    pub pixels: usize,
    /// Bytes after the last complete group, left as read
    pub trailing_bytes: usize,
}

/// Rewrites every complete 3-byte group of `pixel_data` in place so that all
/// three bytes hold the group's grayscale value.
///
/// A trailing partial group is never read as a pixel. Its bytes are passed
/// through unchanged and counted in [`TranscodeStats::trailing_bytes`].
pub fn transcode_pixels(pixel_data: &mut [u8], method: ConversionMethod) -> TranscodeStats {
    let mut groups = pixel_data.chunks_exact_mut(BYTES_PER_PIXEL);
    let mut pixels = 0;

    for group in &mut groups {
        let gray = method.convert(Pixel::new(group[0], group[1], group[2]));
        group.fill(gray);
        pixels += 1;
    }

    let trailing_bytes = groups.into_remainder().len();
    if trailing_bytes > 0 {
        warn!(trailing_bytes, "Pixel data is not a whole number of pixels, trailing bytes left as read");
    }
    debug!(pixels, %method, "Transcoded pixel data");

    TranscodeStats { pixels, trailing_bytes }
}
