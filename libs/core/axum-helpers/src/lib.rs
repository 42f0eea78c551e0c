//! # Axum Helpers
//!
//! Shared HTTP plumbing for the service binaries.
//!
//! ## Modules
//!
//! - **[`server`]**: router factory with API docs, health checks, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: integer id path and validated JSON extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{cors_layer_from_env, create_production_app, create_router, health_router};
//!
//! let cors = cors_layer_from_env(&config.environment)?;
//! let router = create_router::<ApiDoc>(api_routes, cors).merge(health_router(config.app));
//! create_production_app(router, &config.server, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{MessageResponse, cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};
