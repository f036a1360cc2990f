//! Hotel booking service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/hotel-booking/config.toml)
//! hotel-booking
//!
//! # Custom config path and port
//! hotel-booking --config /etc/hotel-booking/config.toml --port 8080
//!
//! # Validate config without starting
//! hotel-booking --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use hotel_booking::config::AppConfig;
use hotel_booking::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "hotel-booking",
    version,
    about = "Hotel booking REST API server",
    long_about = "Hotel booking REST API: hotels, rooms, room search and \
                  reservations with token authentication.\n\n\
                  Default config: ~/.config/hotel-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "HOTEL_BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default superuser.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(hotel_booking::default_config_path);

    let config = AppConfig::load(&config_path)?.with_overrides(cli.port, cli.log_level)?;

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
        ..Default::default()
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
