use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(
        app = %config.app.name,
        version = %config.app.version,
        environment = ?config.environment,
        "Starting users API"
    );

    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    run_migrations::<Migrator>(&db, &config.app.name).await?;

    let state = AppState { config, db };

    let app = api::app(&state)?;

    info!(
        timeout = ?state.config.shutdown_timeout,
        "Serving with graceful shutdown"
    );

    let AppState { config, db } = state;

    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
