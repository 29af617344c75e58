//! Quote Gateway Binary
//!
//! Starts the Upstox quote gateway.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quote-gateway
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `UPSTOX_ACCESS_TOKEN`: Bearer token for upstream quote lookups
//!   (default: empty; upstream rejects unauthenticated calls)
//! - `UPSTOX_API_KEY`: Upstox API key (read but not attached to outbound calls)
//! - `GATEWAY_HTTP_PORT`: HTTP listen port (default: 5000)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use quote_gateway::infrastructure::telemetry;
use quote_gateway::{AppState, GatewayConfig, UpstoxClient, UpstoxConfig, create_router};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    telemetry::init();

    tracing::info!("Starting quote gateway");

    let config = GatewayConfig::from_env();
    log_config(&config);

    let shutdown_token = CancellationToken::new();

    let upstox = UpstoxClient::new(UpstoxConfig::new(config.credentials.clone()))?;
    let state = AppState {
        quote_source: Arc::new(upstox),
    };
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.http_port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Gateway listening");

    let server_token = shutdown_token.clone();
    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(server_token.cancelled_owned())
            .await
        {
            tracing::error!(error = %e, "HTTP server error");
        }
    });

    await_shutdown(shutdown_token).await;
    server.await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

/// Load a .env file from the current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(config: &GatewayConfig) {
    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    if !config.credentials.has_access_token() {
        tracing::warn!("UPSTOX_ACCESS_TOKEN is not set; upstream lookups will be rejected");
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();
}
