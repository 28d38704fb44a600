use axum::Router;
use domain_users::{PgUserStore, UserService, handlers};

use crate::state::AppState;

/// Users routes backed by a transaction-per-operation store on the shared pool
pub fn router(state: &AppState) -> Router {
    let store = PgUserStore::new(state.db.clone());
    handlers::router(UserService::new(store))
}
