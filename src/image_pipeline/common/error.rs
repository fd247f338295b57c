use thiserror::Error;

/// Exit status for usage errors, matching clap's convention.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Exit status for format and IO failures.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid usage: {0}")]
    UsageError(String),

    #[error("Invalid bitmap: {0}")]
    FormatError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UsageError(_) => USAGE_EXIT_CODE,
            _ => FAILURE_EXIT_CODE,
        }
    }
}

impl From<clap::Error> for ConversionError {
    fn from(err: clap::Error) -> Self {
        ConversionError::UsageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
