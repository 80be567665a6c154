//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use photohub_core::config::AppConfig;
use photohub_core::error::AppError;

/// PhotoHub: photo-sharing REST backend
#[derive(Debug, Parser)]
#[command(name = "photohub-server", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to apply on top of config/default.toml
    #[arg(short, long, env = "PHOTOHUB_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self, config: AppConfig) -> Result<(), AppError> {
        match self.command {
            Some(Commands::Serve(args)) => serve::execute(args, config).await,
            Some(Commands::Migrate) => migrate::execute(config).await,
            None => serve::execute(serve::ServeArgs::default(), config).await,
        }
    }
}
