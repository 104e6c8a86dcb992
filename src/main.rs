//! hello-function entry point.
//!
//! Loads configuration, initializes tracing, performs the one-time platform
//! bootstrap, builds the router and serves until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::util::SubscriberInitExt;

use hello_function::config::{AppConfig, DEFAULT_CONFIG_PATH};
use hello_function::{create_router, http, logging, platform, AppError};

/// hello-function: answers every HTTP request with Hello, World!
#[derive(Parser, Debug)]
#[command(name = "hello-function", version, about)]
struct Args {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_function=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listening port (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with priority: CLI > env > file > default
    let (config_path, explicit) = match args.config {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_PATH.to_string(), false),
    };
    let mut config = AppConfig::load_or_default(&config_path, explicit)?;
    config.apply_env(|key| std::env::var(key).ok())?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::subscriber(&log_filter, config.logging.format, std::io::stdout)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let platform = platform::initialize();
    tracing::debug!(managed = platform.is_managed(), "Platform initialized");

    let app = create_router();

    http::start_server(app, &config).await?;

    Ok(())
}
