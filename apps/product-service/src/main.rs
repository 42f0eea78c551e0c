//! Product service: REST API for products, stock levels and suppliers

use axum_helpers::{
    cors_layer_from_env,
    server::{create_production_app, create_router, health_router},
};
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
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(config.database.clone(), Some(config.retry.clone()))
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState { config, db };

    let cors = cors_layer_from_env(&state.config.environment)?;
    let router = create_router::<openapi::ApiDoc>(api::routes(&state), cors)
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting product service"
    );

    let server_config = state.config.server.clone();
    create_production_app(router, &server_config, async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Product service shutdown complete");
    Ok(())
}
