//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`envelope`]**: the `{error, message, data, errors}` response envelope
//! - **[`errors`]**: [`AppError`] rendered as a Fail envelope, with numeric error codes
//! - **[`extractors`]**: id, JSON and query extractors that reject through the envelope
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly with OpenAPI docs, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config);
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{ApiReply, ApiResponse};

pub use errors::{AppError, ErrorCode};

pub use extractors::{EnvelopeJson, EnvelopeQuery, IdPath};

pub use http::{create_cors_layer, security_headers};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};
