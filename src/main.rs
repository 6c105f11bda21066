//! Pokedex application shell.
//!
//! Serves the route table as server-rendered pages and exposes the
//! selection store over a small JSON API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::RouteTable ──▶ views
//!                         │                 (first match)        │
//!                         │                                      │
//!                         └──▶ http::api ──▶ store::SelectionStore ◀┘
//!
//!     Cross-cutting: config (TOML), observability (tracing, metrics),
//!                    lifecycle (graceful shutdown)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pokedex_shell::config::{load_config, ShellConfig};
use pokedex_shell::observability::{logging, metrics};
use pokedex_shell::{app_routes, HttpServer, SelectionStore, Shutdown};

#[derive(Parser)]
#[command(name = "pokedex-shell")]
#[command(about = "Pokedex application shell", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };

    logging::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "pokedex-shell starting"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let routes = app_routes()?;
    let store = SelectionStore::new();

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, routes, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
