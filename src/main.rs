//! Market service: CLI entry point
//!
//! ```sh
//! # Run with default config (~/.config/market-service/config.toml)
//! market-service
//!
//! # Custom config path and port
//! market-service --config /etc/market-service/config.toml --port 8080
//!
//! # Validate config without starting
//! market-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use market_api::config::AppConfig;
use market_api::server::{init_tracing, ServerHandle, ServerOptions};

/// REST API for markets, sellers and products.
#[derive(Parser, Debug)]
#[command(
    name = "market-service",
    version,
    about = "REST API for markets, sellers and products",
    long_about = "Market service: REST API for markets, sellers and products.\n\n\
                  Default config: ~/.config/market-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MARKET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(market_api::default_config_path);

    let loaded = AppConfig::load(&config_path);
    if cli.check {
        // Validation mode reports errors instead of falling back to defaults
        let config = loaded?;
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   On delete   : {}", config.relations.on_delete);
        return Ok(());
    }

    let mut config = match loaded {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let mut cfg = AppConfig::default();
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
