use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check database health with a `SELECT 1` round trip.
///
/// Used by the readiness endpoint.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running database health check");

    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}
