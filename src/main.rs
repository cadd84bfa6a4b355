//! ChatDesk Server: chat admission and agent assignment service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use chatdesk_api::{AppState, build_router};
use chatdesk_core::config::AppConfig;
use chatdesk_core::error::AppError;
use chatdesk_core::traits::{Clock, SystemClock};
use chatdesk_service::ChatScheduler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/default.toml`, the environment overlay
/// and `CHATDESK__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CHATDESK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
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
    tracing::info!("Starting ChatDesk v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Scheduler ────────────────────────────────────────
    let scheduler = Arc::new(ChatScheduler::from_config(&config)?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    tracing::info!(
        agents = config.roster.len(),
        office_hours = %config.scheduler.office_hours,
        poll_timeout_seconds = config.scheduler.poll_timeout_seconds,
        "Scheduler initialized"
    );

    // ── Step 2: Periodic drivers ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let driver_handles = if config.worker.enabled {
        chatdesk_worker::spawn_drivers(
            Arc::clone(&scheduler),
            Arc::clone(&clock),
            &config.worker,
            shutdown_rx,
        )
    } else {
        tracing::warn!("Periodic drivers disabled; sessions will not be assigned or evicted");
        Vec::new()
    };

    // ── Step 3: HTTP server ──────────────────────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(Arc::new(config), scheduler, clock);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ChatDesk server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 5: Wait for periodic drivers ────────────────────────
    tracing::info!("Waiting for periodic drivers to finish...");
    for handle in driver_handles {
        if tokio::time::timeout(grace, handle).await.is_err() {
            tracing::warn!("Periodic driver did not stop within {:?}", grace);
        }
    }

    tracing::info!("ChatDesk server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
