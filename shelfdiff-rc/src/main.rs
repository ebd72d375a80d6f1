//! shelfdiff-rc - Stock/catalog reconciliation microservice
//!
//! Fetches the distributor stock feed (Excel workbook) and the storefront
//! catalog (REST API), normalizes both into comparable labels, and reports
//! which catalog entries have no counterpart in the stock feed.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shelfdiff_common::Settings;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfdiff_rc::{build_router, AppState};

/// Command-line arguments for shelfdiff-rc
#[derive(Parser, Debug)]
#[command(name = "shelfdiff-rc")]
#[command(about = "Stock/catalog reconciliation microservice")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "SHELFDIFF_PORT")]
    port: Option<u16>,

    /// Path to TOML configuration file
    #[arg(short, long, env = "SHELFDIFF_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfdiff_rc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting shelfdiff-rc v{}", env!("CARGO_PKG_VERSION"));

    let mut settings =
        Settings::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(port) = args.port {
        settings.listen_port = port;
    }

    info!("Stock feed: {}", settings.stock_feed.url);
    info!("Catalog API: {}", settings.catalog.url);
    if let Some(dir) = &settings.artifact_dir {
        info!("CSV artifacts: {}", dir.display());
    }

    let port = settings.listen_port;
    let state = AppState::new(settings).context("Failed to initialize clients")?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
