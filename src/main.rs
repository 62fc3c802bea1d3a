//! Noteblock Server: folder and note storage over HTTP.
//!
//! Main entry point that loads configuration, installs logging and starts
//! the server.

use tracing_subscriber::{EnvFilter, fmt};

use noteblock_core::config::{AppConfig, LogFormat};
use noteblock_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = noteblock_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `NOTEBLOCK_CONFIG` if set, otherwise from the
/// `config/` directory for `NOTEBLOCK_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("NOTEBLOCK_CONFIG") {
        return AppConfig::from_file(&path);
    }

    let env = std::env::var("NOTEBLOCK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
