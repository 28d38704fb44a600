use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI at `/docs`, ReDoc at `/redoc`)
/// - API routes nested under `/api`
/// - Common middleware (tracing, security headers, CORS, compression)
/// - 404 fallback handler
///
/// Liveness and readiness routes are merged by the app afterwards using
/// [`health_router`](super::health::health_router) and its own ready handler.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/v1/users", users_router);
/// let router = create_router::<ApiDoc>(api_routes, &config.server)?;
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_layer(server_config)?;

    if server_config.allows_any_origin() {
        info!("CORS configured to allow any origin");
    } else {
        info!(origins = ?server_config.cors_allowed_origins, "CORS configured");
    }

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then drains in-flight requests and
/// runs `cleanup` bounded by `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_task = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_signal().await }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    signal_task.abort();

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<TestDoc>(apis, &ServerConfig::default()).unwrap()
    }

    async fn get_path(path: &str) -> axum::response::Response {
        router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn nests_api_routes_under_prefix() {
        let response = get_path("/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let response = get_path("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let response = get_path(OPENAPI_JSON_PATH).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["info"]["title"], "test");
    }
}
