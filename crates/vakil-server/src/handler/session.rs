//! Session view handler.
//!
//! Every authenticated page load consults this endpoint to learn the
//! session's effective role, onboarding stage and premium status. When the
//! datastore is unreachable the view degrades to a transient identity
//! instead of failing the login.

use aide::axum::ApiRouter;
use axum::http::StatusCode;
use jiff::Timestamp;

use super::response::SessionAccountResponse;
use crate::extract::{Json, SessionAccount};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for session operations.
const TRACING_TARGET: &str = "vakil_server::handler::session";

/// Returns the current session's account view.
#[tracing::instrument(skip_all)]
async fn get_session_account(
    session: SessionAccount,
) -> Result<(StatusCode, Json<SessionAccountResponse>)> {
    let response = SessionAccountResponse::new(&session, Timestamp::now());

    tracing::debug!(
        target: TRACING_TARGET,
        account_id = ?response.account_id,
        transient = response.transient,
        "session account resolved"
    );

    Ok((StatusCode::OK, Json(response)))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(_state: ServiceState) -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new().api_route("/session/account", get(get_session_account))
}
