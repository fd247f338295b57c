use std::process::ExitCode;

use bmp_grayscale_rs::cli::Cli;
use bmp_grayscale_rs::image_pipeline::{BmpToGrayscalePipeline, ConversionError};
use bmp_grayscale_rs::logger;

use tracing::{error, info};

fn main() -> ExitCode {
    logger::init();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(ConversionError::from(e).exit_code());
        }
    };

    let pipeline = BmpToGrayscalePipeline::new(cli.to_config());
    info!("Conversion method: {}", pipeline.config().method);

    match pipeline.convert_file(&cli.input) {
        Ok(output) => {
            info!(output = %output.display(), "Conversion successful");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = e.exit_code();
            let report = anyhow::Error::new(e)
                .context(format!("converting {}", cli.input.display()));
            error!("{:#}", report);
            ExitCode::from(code)
        }
    }
}
