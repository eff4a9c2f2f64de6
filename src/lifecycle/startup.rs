//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Compile the dashboard route table
//! - Build the router and bind it to the host attachment point
//! - Mount the first render
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The attachment point is checked before any component mounts

use std::sync::Arc;

use thiserror::Error;

use crate::app::App;
use crate::config::{validate_config, ConfigError, ShellConfig};
use crate::history::History;
use crate::host::{Host, HostError};
use crate::routing::{dashboard_routes, DashboardPages, RouteError, RouteTree, Router};

/// Error type for application startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] RouteError),

    #[error("attachment point '#{id}' not found in host document")]
    MissingAttachmentPoint { id: String },

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Start the dashboard with its default pages.
pub fn start(
    config: &ShellConfig,
    history: Arc<dyn History>,
    host: Arc<dyn Host>,
) -> Result<App, StartupError> {
    validate_config(config).map_err(ConfigError::Validation)?;
    let tree = dashboard_routes(DashboardPages::default())?;
    start_with_routes(config, Arc::new(tree), history, host)
}

/// Start the application around an already compiled route tree.
pub fn start_with_routes(
    config: &ShellConfig,
    tree: Arc<RouteTree>,
    history: Arc<dyn History>,
    host: Arc<dyn Host>,
) -> Result<App, StartupError> {
    tracing::info!(
        element_id = %config.mount.element_id,
        fallback = ?config.routing.fallback,
        routes = tree.len(),
        "Starting dashboard shell"
    );

    let router = Router::new(tree, history)
        .with_fallback(config.routing.fallback)
        .with_metrics(config.observability.metrics_enabled);

    let mut app = App::new(router, host, &config.mount)?;
    app.start()?;
    Ok(app)
}
