//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation and middleware
//! - Liveness endpoints and a readiness check runner
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.server)?
//!     .merge(health_router(config.app.clone()));
//!
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{
    HealthCheckFuture, HealthResponse, ServiceInfoResponse, health_router, run_health_checks,
};
pub use shutdown::ShutdownCoordinator;
