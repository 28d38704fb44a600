use axum::http::{HeaderValue, Method, header};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer for the configured origins.
///
/// A `*` entry (or no entry at all) yields a permissive layer. Otherwise only
/// the listed origins are allowed, with credentials and a one hour max age.
pub fn cors_layer(config: &ServerConfig) -> io::Result<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid CORS origin '{origin}': {e}"),
                )
            })
        })
        .collect::<io::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
