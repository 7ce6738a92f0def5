//! Premium subscription handlers.
//!
//! The plan catalog is fixed at build time. Activation trusts the supplied
//! payment reference: verifying the charge with the payment gateway is a
//! documented precondition of the endpoint, not something the manager does
//! itself. Re-activating always overwrites the previous expiry; durations
//! never stack.

use std::str::FromStr;

use aide::axum::ApiRouter;
use axum::http::StatusCode;
use bigdecimal::BigDecimal;
use jiff::Timestamp;
use strum::IntoEnumIterator;
use vakil_postgres::model::{NewPayment, UpdateAccount};
use vakil_postgres::query::{AccountRepository, PaymentRepository};
use vakil_postgres::types::{PaymentStatus, PremiumPlan};

use super::request::ActivatePremiumRequest;
use super::response::{ActivationResponse, PlanResponse};
use crate::extract::{Json, PgPool, SessionAccount, ValidateJson};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for premium operations.
const TRACING_TARGET: &str = "vakil_server::handler::premium";

/// Lists the plan catalog; pure lookup, no side effects.
#[tracing::instrument(skip_all)]
async fn list_plans() -> Result<(StatusCode, Json<Vec<PlanResponse>>)> {
    let plans = PremiumPlan::iter().map(PlanResponse::new).collect();
    Ok((StatusCode::OK, Json(plans)))
}

/// Activates a premium plan from a confirmed payment.
///
/// The caller must have verified the charge with the payment gateway before
/// invoking this endpoint; the reference is recorded as-is.
#[tracing::instrument(skip_all)]
async fn activate_premium(
    PgPool(mut conn): PgPool,
    session: SessionAccount,
    ValidateJson(request): ValidateJson<ActivatePremiumRequest>,
) -> Result<(StatusCode, Json<ActivationResponse>)> {
    let account = session.persisted()?;

    let Ok(plan) = PremiumPlan::from_str(&request.plan_id) else {
        return Err(ErrorKind::ValidationError
            .with_resource("planId")
            .with_message("Unknown subscription plan"));
    };

    let now = Timestamp::now();
    let expires_at = plan.expiry_from(now);

    tracing::trace!(
        target: TRACING_TARGET,
        account_id = %account.id,
        plan = %plan,
        "activating premium plan"
    );

    // The account update and the immutable payment record commit together.
    let account_id = account.id;
    let payment_reference = request.payment_reference.clone();
    let account = conn
        .transaction(|conn| {
            use vakil_postgres::ScopedFutureExt;

            async move {
                let account = conn
                    .update_account(
                        account_id,
                        UpdateAccount {
                            is_premium: Some(true),
                            premium_plan: Some(plan),
                            premium_expires_at: Some(expires_at.into()),
                            payment_reference: Some(payment_reference.clone()),
                            ..Default::default()
                        },
                    )
                    .await?;

                conn.create_payment(NewPayment {
                    account_id,
                    amount: BigDecimal::from(plan.price()),
                    currency: "INR".to_owned(),
                    status: PaymentStatus::Succeeded,
                    external_reference: payment_reference,
                })
                .await?;

                Ok::<_, vakil_postgres::PgError>(account)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = %account.id,
        plan = %plan,
        expires_at = %expires_at,
        "premium plan activated"
    );

    Ok((
        StatusCode::OK,
        Json(ActivationResponse {
            premium_plan: plan,
            premium_expires_at: expires_at,
        }),
    ))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(_state: ServiceState) -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/premium/plans", get(list_plans))
        .api_route("/premium/activate", post(activate_premium))
}
