//! HTTP middleware: CORS and security headers.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer(&server_config)?);
//! ```

pub mod cors;
pub mod security;

pub use cors::cors_layer;
pub use security::security_headers;
