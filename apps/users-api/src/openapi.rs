use axum_helpers::{ErrorResponse, HealthResponse, ServiceInfoResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(ErrorResponse, HealthResponse, ServiceInfoResponse)
    ),
    info(
        title = "Users API",
        description = "CRUD service for user records with case-insensitive unique emails"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
