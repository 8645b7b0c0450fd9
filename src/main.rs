//! Hum Studios Server
//!
//! Run with: cargo run --bin humstudios
//!
//! # Configuration
//!
//! Read from `--config`, or the first of `~/.config/humstudios/config.toml`,
//! `/etc/humstudios/config.toml` and `./config.toml`. Environment variables
//! (`HUMSTUDIOS_*`) override the file; `RUST_LOG` overrides the log filter.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use humstudios::api::{serve, AppState};
use humstudios::config::{Config, LoggingConfig};
use humstudios::employee::EMPLOYEE_COLLECTION;
use humstudios::store::{self, DocumentStore};

#[derive(Parser)]
#[command(name = "humstudios")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hum Studios site and employee admin server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Hum Studios server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        backend = %config.store.backend,
        collection = EMPLOYEE_COLLECTION,
        projection = %config.employees.projection,
        "Employee store configured"
    );

    let store = store::connect(&config.store).await?;

    match store.health_check(EMPLOYEE_COLLECTION).await {
        Ok(()) => tracing::info!("Document store reachable"),
        Err(e) => tracing::warn!("Document store not reachable: {} (employee reads will fail)", e),
    }

    let server = config.server.clone();
    let state = AppState::new(store, config);

    serve(state, &server).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
