//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::{AppState, Storage};

/// Create products router backed by the configured store
pub fn router(state: &AppState) -> Router {
    match &state.storage {
        Storage::Postgres(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository))
        }
        Storage::Memory(repository) => handlers::router(ProductService::new(repository.clone())),
    }
}
