//! Products API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::InMemoryProductRepository;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let storage = match &config.database {
        Some(database) => {
            let db = database::postgres::connect_from_config_with_retry(database.clone(), None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
                .await?;

            Storage::Postgres(db)
        }
        None => {
            tracing::warn!("Using in-memory product storage; data is lost on restart");
            Storage::Memory(InMemoryProductRepository::new())
        }
    };

    let state = AppState { config, storage };

    // Build REST router; create_router adds the /api prefix, docs and middleware
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.server);
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting Products API on port {} with {} storage",
        state.config.server.port, state.config.storage
    );

    let server_config = state.config.server.clone();
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            if let Storage::Postgres(db) = state.storage {
                info!("Shutting down: closing PostgreSQL connections");
                match db.close().await {
                    Ok(()) => info!("PostgreSQL connection closed successfully"),
                    Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
