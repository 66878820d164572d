//! EXIF Parser - print and store the EXIF metadata of a JPEG file.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exif_parser::{config::Config, parse_image_file, write_output_file};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let record = match parse_image_file(&config.image) {
        Ok(record) => record,
        Err(e) => {
            error!("Error parsing image file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let content = match record.to_json(config.pretty()) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.writes_output() {
        if let Err(e) = write_output_file(&config.output, content.as_bytes()) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        info!(
            "Wrote {} field(s) to {}",
            record.len(),
            config.output.display()
        );
    }

    println!("{}", content);

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so stdout carries only the JSON result.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exif_parser=debug"
    } else {
        "exif_parser=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
