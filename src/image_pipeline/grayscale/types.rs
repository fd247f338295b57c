//! Grayscale conversion types and configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;
use crate::image_pipeline::grayscale::codec;

/// One 24-bit pixel, taken from three consecutive buffer bytes in the order
/// they appear in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Grayscale formula selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionMethod {
    /// Midpoint of the brightest and darkest component
    Lightness,
    /// Mean of the three components
    Average,
    /// Weighted sum favouring green
    Luminosity,
}

impl ConversionMethod {
    pub const ALL: [ConversionMethod; 3] = [Self::Lightness, Self::Average, Self::Luminosity];

    pub fn convert(self, pixel: Pixel) -> u8 {
        match self {
            Self::Lightness => codec::lightness(pixel),
            Self::Average => codec::average(pixel),
            Self::Luminosity => codec::luminosity(pixel),
        }
    }

    /// Numeric selector used on the command line.
    pub fn selector(self) -> u8 {
        match self {
            Self::Lightness => 1,
            Self::Average => 2,
            Self::Luminosity => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Lightness => "Lightness",
            Self::Average => "Average",
            Self::Luminosity => "Luminosity",
        }
    }

    /// Lists every selector with its method, e.g. `1 = Lightness, ...`.
    pub fn selector_help() -> String {
        Self::ALL
            .iter()
            .map(|method| format!("{} = {}", method.selector(), method))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Appended to the input's base name to form the output file name.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Lightness => "-LightnessConversion.bmp",
            Self::Average => "-AverageConversion.bmp",
            Self::Luminosity => "-LuminosityConversion.bmp",
        }
    }
}

impl fmt::Display for ConversionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ConversionMethod {
    type Error = ConversionError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(Self::Lightness),
            2 => Ok(Self::Average),
            3 => Ok(Self::Luminosity),
            _ => Err(ConversionError::UsageError(format!(
                "invalid conversion method {selector}, expected one of {}",
                Self::selector_help()
            ))),
        }
    }
}

impl FromStr for ConversionMethod {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector: u8 = s.trim().parse().map_err(|_| {
            ConversionError::UsageError(format!(
                "invalid conversion method '{s}', expected one of {}",
                Self::selector_help()
            ))
        })?;
        Self::try_from(selector)
    }
}

/// Configuration for bitmap grayscale conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Grayscale formula to apply
    pub method: ConversionMethod,
    /// Directory the output file is written to
    pub output_dir: PathBuf,
    /// Reject pixel data whose length is not a multiple of 3 instead of
    /// passing the trailing bytes through
    pub reject_partial_pixels: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            method: ConversionMethod::Lightness,
            output_dir: PathBuf::from("."),
            reject_partial_pixels: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    method: Option<ConversionMethod>,
    output_dir: Option<PathBuf>,
    reject_partial_pixels: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn method(mut self, method: ConversionMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn reject_partial_pixels(mut self, reject: bool) -> Self {
        self.reject_partial_pixels = Some(reject);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            method: self.method.unwrap_or(default.method),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            reject_partial_pixels: self.reject_partial_pixels.unwrap_or(default.reject_partial_pixels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        assert_eq!(ConversionMethod::try_from(1).unwrap(), ConversionMethod::Lightness);
        assert_eq!(ConversionMethod::try_from(2).unwrap(), ConversionMethod::Average);
        assert_eq!(ConversionMethod::try_from(3).unwrap(), ConversionMethod::Luminosity);
        for method in ConversionMethod::ALL {
            assert_eq!(ConversionMethod::try_from(method.selector()).unwrap(), method);
        }
    }

    #[test]
    fn test_invalid_selectors() {
        for selector in [0u8, 4, 5, 255] {
            assert!(matches!(
                ConversionMethod::try_from(selector),
                Err(ConversionError::UsageError(_))
            ));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("3".parse::<ConversionMethod>().unwrap(), ConversionMethod::Luminosity);
        assert!("4".parse::<ConversionMethod>().is_err());
        assert!("-1".parse::<ConversionMethod>().is_err());
        assert!("Average".parse::<ConversionMethod>().is_err());
        assert!("".parse::<ConversionMethod>().is_err());
    }

    #[test]
    fn test_selector_help() {
        assert_eq!(
            ConversionMethod::selector_help(),
            "1 = Lightness, 2 = Average, 3 = Luminosity"
        );
        let err = ConversionMethod::try_from(4).unwrap_err();
        assert!(err.to_string().contains("3 = Luminosity"));
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(ConversionMethod::Lightness.file_suffix(), "-LightnessConversion.bmp");
        assert_eq!(ConversionMethod::Average.file_suffix(), "-AverageConversion.bmp");
        assert_eq!(ConversionMethod::Luminosity.file_suffix(), "-LuminosityConversion.bmp");
    }

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .method(ConversionMethod::Average)
            .output_dir("/tmp/out")
            .reject_partial_pixels(true)
            .build();

        assert_eq!(config.method, ConversionMethod::Average);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert!(config.reject_partial_pixels);
    }

    #[test]
    fn test_config_defaults() {
        let config = ConversionConfig::builder().build();

        assert_eq!(config.method, ConversionMethod::Lightness);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.reject_partial_pixels);
    }
}
