//! PhotoHub server: a photo-sharing REST backend.
//!
//! Entry point that parses the command line, loads configuration,
//! initialises logging and dispatches to a subcommand.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use photohub_core::config::{AppConfig, LoggingConfig};

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(env = %cli.env, "Loaded PhotoHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.execute(config).await {
        tracing::error!(error = ?e, "PhotoHub exited with an error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. `RUST_LOG` wins over `logging.level`.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
