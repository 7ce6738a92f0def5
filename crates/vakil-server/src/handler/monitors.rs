//! System health monitoring handlers.
//!
//! Provides a liveness endpoint with datastore pool statistics. The check
//! deliberately avoids taking a connection so a saturated pool cannot make
//! the probe itself hang.

use aide::axum::ApiRouter;
use axum::extract::State;
use axum::http::StatusCode;
use jiff::Timestamp;
use vakil_postgres::PgClient;

use super::response::HealthResponse;
use crate::extract::Json;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "vakil_server::handler::monitors";

/// Returns liveness and connection pool statistics.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(pg_client): State<PgClient>,
) -> Result<(StatusCode, Json<HealthResponse>)> {
    let pool_status = pg_client.pool_status();
    let is_healthy = !pool_status.is_under_pressure();

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy,
        pool_size = pool_status.size,
        pool_waiting = pool_status.waiting,
        "health status evaluated"
    );

    let response = HealthResponse {
        is_healthy,
        pool: pool_status.into(),
        updated_at: Timestamp::now(),
    };

    Ok((status_code, Json(response)))
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(_state: ServiceState) -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new().api_route("/monitors/health", get(health_status))
}
