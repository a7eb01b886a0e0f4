//! Realm Server: identity and ownership backend for a small RPG.
//!
//! Main entry point that wires all crates together and starts the server.

use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use realm_api::{AppState, build_app};
use realm_core::config::{AppConfig, LogFormat};
use realm_core::error::AppError;
use realm_database::Repositories;

#[tokio::main]
async fn main() {
    let env = std::env::var("REALM_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured level.
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Realm v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.jwt_secret == AppConfig::default().auth.jwt_secret {
        tracing::warn!("auth.jwt_secret is the built-in default; set REALM__AUTH__JWT_SECRET");
    }

    let repositories = Repositories::from_config(&config.database).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(AppState::new(config, repositories));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Realm server listening on {}", addr);

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    // In-flight requests get `shutdown_grace_seconds` to finish once the
    // signal arrives.
    let deadline = async {
        let _ = stop_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = async { server.await } => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = deadline => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out");
        }
    }

    tracing::info!("Realm server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
