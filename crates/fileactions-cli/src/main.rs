//! fileactions - print the actions a file manager offers for a selection.
//!
//! Startup sequence:
//! 1. Initialize tracing
//! 2. Parse arguments
//! 3. Load config from ~/.config/fileactions/config.toml or `--config`
//! 4. Resolve the scenario and print the report

use std::process::ExitCode;

use clap::Parser;

use fileactions::AppConfig;
use fileactions_cli::{Args, CliResult};

/// Initialize the tracing subscriber for structured logging.
///
/// Log levels can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Enable debug logs for all modules
/// - `RUST_LOG=info,fileactions=debug` - Info for most, debug for fileactions
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fileactions=debug"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> CliResult<AppConfig> {
    match &args.config {
        Some(path) => Ok(AppConfig::load(path)?),
        None => {
            let path = fileactions_core::config_path()?;
            Ok(AppConfig::load_or_default(&path)?)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let result = load_config(&args).and_then(|config| fileactions_cli::run(&args, &config));

    match result {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
