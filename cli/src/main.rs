//! Trastero admin: CLI server
//!
//! Headless REST API for managing storage-unit rentals, suitable for
//! deployment as a systemd service, Docker container or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/trastero-admin/config.toml)
//! trastero-server
//!
//! # Custom config path
//! trastero-server --config /etc/trastero-admin/config.toml
//!
//! # Override the port
//! trastero-server --api-port 8080
//!
//! # Validate config without starting
//! trastero-server --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use trastero_admin::config::{default_config_path, AppConfig};
use trastero_admin::server::{init_tracing, ServerHandle, ServerOptions};

/// Trastero admin: back-office API for storage-unit rentals.
#[derive(Parser, Debug)]
#[command(
    name = "trastero-server",
    version,
    about = "Back-office REST API for storage-unit rentals",
    long_about = "Trastero admin: REST API server for clientes, trasteros, \
                  contratos, payments, expenses and loans.\n\n\
                  Default config: ~/.config/trastero-admin/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TRASTERO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default admin user.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let loaded = AppConfig::load(&config_path);
    if cli.check {
        let config = loaded?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}:{}", config.server.api_host, config.server.api_port);
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let (mut config, load_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
        config.server.api_port = port;
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
