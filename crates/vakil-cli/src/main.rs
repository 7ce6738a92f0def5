#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod reconcile;
mod server;

use std::process;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vakil_server::handler;
use vakil_server::service::ServiceState;

use crate::config::{Cli, Command, ServeArgs};

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "vakil_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "vakil_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "vakil_cli::config";
pub const TRACING_TARGET_RECONCILE: &str = "vakil_cli::reconcile";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    init_tracing();
    log_startup_info();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::ReconcileAccounts(args) => reconcile::run(args).await,
    }
}

/// Starts the HTTP API server.
async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    args.server
        .validate()
        .context("invalid server configuration")?;
    args.server.log();

    let state = ServiceState::from_config(&args.service)
        .await
        .context("failed to create service state")?;
    let router = handler::router(state);

    server::serve(router, args.server).await?;

    Ok(())
}

/// Initializes tracing with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting vakil"
    );

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
