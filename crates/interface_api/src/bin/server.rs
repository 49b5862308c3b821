//! QuoteMaster - API Server Binary
//!
//! This binary starts the HTTP API server for the quoting service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin quotemaster-api
//!
//! # Run with environment variables
//! QUOTE_PORT=9000 QUOTE_LOG_FORMAT=json cargo run --bin quotemaster-api
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTE_HOST` - Server host (default: 0.0.0.0)
//! * `QUOTE_PORT` - Server port (default: 8000)
//! * `QUOTE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `QUOTE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `QUOTE_TIMEZONE` - IANA timezone quotes are dated in (default: UTC)

use anyhow::Context;
use domain_quote::QuoteEngine;
use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The configured timezone is unknown
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config);

    let timezone = config.quoting_timezone()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %timezone,
        "Starting QuoteMaster API Server"
    );

    let app = create_router(QuoteEngine::system(timezone), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits. A signal handler
/// that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
