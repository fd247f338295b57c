use tracing::{info, instrument};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    bmp::{BitmapReader, BitmapWriter, FileHeader, FsBitmapReader, RawImageBuffer, StandardBitmapWriter},
    grayscale::{transcode_pixels, ConversionConfig, TranscodeStats, BYTES_PER_PIXEL},
    conversions::naming::output_file_name,
};

pub struct BmpToGrayscalePipeline<R: BitmapReader, W: BitmapWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl BmpToGrayscalePipeline<FsBitmapReader, StandardBitmapWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: FsBitmapReader,
            writer: StandardBitmapWriter,
            config,
        }
    }
}

impl<R: BitmapReader, W: BitmapWriter> BmpToGrayscalePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_pixel_layout(&self, pixel_bytes: usize) -> Result<()> {
        if !self.config.reject_partial_pixels {
            return Ok(());
        }

        if pixel_bytes % BYTES_PER_PIXEL != 0 {
            return Err(ConversionError::FormatError(format!(
                "pixel data length {} is not a multiple of {}",
                pixel_bytes, BYTES_PER_PIXEL
            )));
        }

        Ok(())
    }

    /// Validates the header and rewrites the pixel data of `image` in place.
    ///
    /// Nothing is mutated unless every check passes.
    #[instrument(skip(self, image), fields(input_size = image.data.len(), method = %self.config.method))]
    pub fn convert(&self, image: &mut RawImageBuffer) -> Result<TranscodeStats> {
        info!("Starting bitmap grayscale conversion");

        let header = {
            let _span = tracing::info_span!("validate_header").entered();
            let header = FileHeader::parse(&image.data)?;
            header.validate(image.file_len)?;
            header
        };

        let start = header.pixel_data_start();
        let pixel_data = image.data.get_mut(start..).ok_or_else(|| {
            ConversionError::FormatError(format!(
                "pixel data offset {} is past the end of the buffer",
                start
            ))
        })?;
        self.validate_pixel_layout(pixel_data.len())?;

        let stats = {
            let _span = tracing::info_span!("transcode_pixels",
                pixel_data_offset = start,
                pixel_bytes = pixel_data.len()
            ).entered();
            transcode_pixels(pixel_data, self.config.method)
        };

        info!(
            pixels = stats.pixels,
            trailing_bytes = stats.trailing_bytes,
            "Conversion complete"
        );
        Ok(stats)
    }

    /// Where [`convert_file`](Self::convert_file) writes the result for
    /// `input_path`.
    pub fn output_path_for<P: AsRef<Path>>(&self, input_path: P) -> PathBuf {
        self.config
            .output_dir
            .join(output_file_name(input_path.as_ref(), self.config.method))
    }

    /// Converts `input_path` and writes the result into the configured output
    /// directory under the derived name. Returns the path written.
    #[instrument(skip(self, input_path))]
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = self.output_path_for(input_path);

        self.convert_file_to(input_path, &output_path)?;

        Ok(output_path)
    }

    pub fn convert_file_to<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<TranscodeStats> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let mut image = {
            let _span = tracing::info_span!("read_input_file").entered();
            self.reader.read_bitmap(input_path)?
        };

        let stats = self.convert(&mut image)?;

        // The output file is only created once the input has been fully
        // validated and converted.
        {
            let _span = tracing::info_span!("write_output_file").entered();
            let output_err = |e: std::io::Error| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            };
            let mut output_file = File::create(output_path).map_err(output_err)?;
            self.writer
                .write_bitmap(&image, &mut output_file)
                .map_err(|e| match e {
                    ConversionError::IoError(io) => output_err(io),
                    other => other,
                })?;
        }

        Ok(stats)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
