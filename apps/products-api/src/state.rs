//! Application state management

use domain_products::InMemoryProductRepository;
use sea_orm::DatabaseConnection;

/// The product store the API runs against
#[derive(Clone)]
pub enum Storage {
    Postgres(DatabaseConnection),
    Memory(InMemoryProductRepository),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub storage: Storage,
}
