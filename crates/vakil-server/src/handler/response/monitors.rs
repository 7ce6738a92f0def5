//! Health monitoring response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vakil_postgres::PgPoolStatus;

/// Connection pool statistics exposed by the health endpoint.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatusResponse {
    /// Maximum number of connections in the pool.
    pub max_size: usize,
    /// Current number of connections in the pool.
    pub size: usize,
    /// Number of available connections.
    pub available: usize,
    /// Number of requests waiting for connections.
    pub waiting: usize,
}

impl From<PgPoolStatus> for PoolStatusResponse {
    fn from(status: PgPoolStatus) -> Self {
        Self {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }
}

/// Liveness response with pool statistics.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Whether the service considers itself healthy.
    pub is_healthy: bool,
    /// Datastore connection pool statistics.
    pub pool: PoolStatusResponse,
    /// Timestamp of this health evaluation.
    pub updated_at: Timestamp,
}
