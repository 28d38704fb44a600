use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod users;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/v1/users", users::router(state))
}

/// `/ready` with a live database check.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Full application: documented API under `/api` plus `/`, `/health`, `/ready`.
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state), &state.config.server)?;

    Ok(router
        .merge(health_router(state.config.app.clone()))
        .merge(ready_router(state.clone())))
}
