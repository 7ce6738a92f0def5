//! Administrator grant/revoke handlers.
//!
//! Only an existing administrator may promote or demote another account,
//! located by normalized email. Demotion computes the fallback role at
//! revoke time from the target's current bar registration, and the sole
//! remaining administrator can never be demoted.

use aide::axum::ApiRouter;
use axum::http::StatusCode;
use vakil_postgres::query::AccountRepository;
use vakil_postgres::types::AccountRole;

use super::request::RoleGrantRequest;
use super::response::RoleResponse;
use crate::extract::{Json, PgPool, SessionAccount, ValidateJson};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for admin operations.
const TRACING_TARGET: &str = "vakil_server::handler::admin";

/// Promotes the target account to administrator.
#[tracing::instrument(skip_all)]
async fn grant_admin(
    PgPool(mut conn): PgPool,
    session: SessionAccount,
    ValidateJson(request): ValidateJson<RoleGrantRequest>,
) -> Result<(StatusCode, Json<RoleResponse>)> {
    let caller = session.require_admin()?;

    tracing::trace!(
        target: TRACING_TARGET,
        caller_id = %caller.id,
        "granting administrator role"
    );

    let Some(target) = conn.find_account_by_email(&request.target_email).await? else {
        return Err(ErrorKind::NotFound
            .with_resource("account")
            .with_message("No account matches the target email"));
    };

    let account = conn.set_account_role(target.id, AccountRole::Admin).await?;

    tracing::info!(
        target: TRACING_TARGET,
        caller_id = %caller.id,
        target_id = %account.id,
        "administrator role granted"
    );

    Ok((StatusCode::OK, Json(RoleResponse::new(account))))
}

/// Revokes the target account's administrator role.
#[tracing::instrument(skip_all)]
async fn revoke_admin(
    PgPool(mut conn): PgPool,
    session: SessionAccount,
    ValidateJson(request): ValidateJson<RoleGrantRequest>,
) -> Result<(StatusCode, Json<RoleResponse>)> {
    let caller = session.require_admin()?;

    tracing::trace!(
        target: TRACING_TARGET,
        caller_id = %caller.id,
        "revoking administrator role"
    );

    let Some(target) = conn.find_account_by_email(&request.target_email).await? else {
        return Err(ErrorKind::NotFound
            .with_resource("account")
            .with_message("No account matches the target email"));
    };

    if !target.role.is_administrator() {
        return Err(ErrorKind::Conflict
            .with_resource("role")
            .with_message("Target account does not hold the administrator role"));
    }

    // Demoting the last administrator would lock out all administrative
    // functions; grant a replacement first.
    if conn.count_admins().await? <= 1 {
        return Err(ErrorKind::Conflict
            .with_resource("role")
            .with_message("Refusing to demote the sole remaining administrator"));
    }

    let fallback = AccountRole::demotion_fallback(target.has_bar_registration());
    let account = conn.set_account_role(target.id, fallback).await?;

    tracing::info!(
        target: TRACING_TARGET,
        caller_id = %caller.id,
        target_id = %account.id,
        new_role = %account.role,
        "administrator role revoked"
    );

    Ok((StatusCode::OK, Json(RoleResponse::new(account))))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(_state: ServiceState) -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/admin/grants", post(grant_admin))
        .api_route("/admin/grants", delete(revoke_admin))
}
