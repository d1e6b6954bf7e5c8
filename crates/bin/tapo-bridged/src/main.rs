//! # tapo-bridged — tapo-bridge daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Build the device registry from the compiled-in table
//! - Construct the Tapo device connector (adapter)
//! - Construct the control service, injecting registry, credentials and connector
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod devices;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tapo_bridge_adapter_http_axum::router;
use tapo_bridge_adapter_http_axum::state::AppState;
use tapo_bridge_adapter_tapo::TapoConnector;
use tapo_bridge_app::services::control_service::ControlService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?,
        )
        .init();

    // Services
    let registry = devices::registry().context("invalid device table")?;
    let connector = TapoConnector::new(config.adapter_config());
    let control_service = ControlService::new(registry, config.credentials(), connector);

    for entry in control_service.registry().iter() {
        tracing::debug!(
            device = %entry.name,
            address = %entry.address,
            family = %entry.family,
            "registered device"
        );
    }
    tracing::info!(
        devices = control_service.registry().len(),
        "device registry loaded"
    );
    if !control_service.has_credentials() {
        tracing::warn!("TAPO_EMAIL / TAPO_PASSWORD not set, control requests will be rejected");
    }

    // HTTP
    let app = router::build(AppState::new(control_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("tapo-bridged listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("tapo-bridged stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
