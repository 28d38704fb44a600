//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (integer id path, validated JSON and query)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(Router::new(), &config)?;
//! create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ServiceInfoResponse, ShutdownCoordinator,
    create_production_app, create_router, health_router, run_health_checks,
};

pub use http::{cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};
