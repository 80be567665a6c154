//! Start the PhotoHub server.

use clap::Args;

use photohub_core::config::AppConfig;
use photohub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        provider = ?config.database.provider,
        "Serving PhotoHub"
    );

    photohub_api::run_server(config).await
}
