//! Command line interface.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::image_pipeline::{ConversionConfig, ConversionMethod};

#[derive(Parser, Debug)]
#[command(name = "bmp-grayscale", version)]
#[command(about = "Convert an uncompressed 24-bit bitmap to grayscale")]
#[command(after_help = "Methods: 1 = Lightness, 2 = Average, 3 = Luminosity\n\
    The output is written to the current directory as <name>-<Method>Conversion.bmp")]
pub struct Cli {
    /// Path to the bitmap to convert
    pub input: PathBuf,

    /// Conversion method: 1 = Lightness, 2 = Average, 3 = Luminosity
    #[arg(value_parser = parse_method)]
    pub method: ConversionMethod,
}

fn parse_method(s: &str) -> Result<ConversionMethod, String> {
    s.parse()
        .map_err(|_| format!("'{s}' is not one of {}", ConversionMethod::selector_help()))
}

impl Cli {
    /// Parses arguments without exiting the process on failure.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    pub fn to_config(&self) -> ConversionConfig {
        ConversionConfig::builder().method(self.method).build()
    }
}
