use sea_orm::DatabaseConnection;
use std::time::Instant;
use tracing::debug;

use crate::common::DatabaseError;

/// Ping the pool, used by the readiness probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let started = Instant::now();

    db.ping().await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL ping failed: {}", e))
    })?;

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "PostgreSQL health check passed"
    );
    Ok(())
}
