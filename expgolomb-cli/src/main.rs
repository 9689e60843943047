use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod config;
mod decode;
mod error;
mod input;

use cli::{CliArgs, OutputFormat};
use config::DecodeConfig;
use error::AppError;

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        // Log the full error for debugging
        error!(error = ?e, "Application failed");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<(), AppError> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    // Setup logging, RUST_LOG takes precedence over --verbose
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    let config = DecodeConfig::from(&args);
    info!("{config}");

    run(&config)
}

fn run(config: &DecodeConfig) -> Result<(), AppError> {
    let data = config.input.load()?;
    let report = decode::decode(data, config.signed)?;

    match config.format {
        OutputFormat::Plain => {
            if report.values.count() > 0 {
                println!("{}", report.values.to_lines());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!(
        values = report.values.count(),
        total_bits = report.total_bits,
        trailing_bits = report.trailing_bits,
        "Decoding finished at end of stream"
    );

    Ok(())
}
