//! Premium subscription response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vakil_postgres::types::PremiumPlan;

/// A single catalog entry returned by the plan listing.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Plan identifier.
    pub id: PremiumPlan,
    /// Subscription duration in days.
    pub duration_days: i64,
    /// Total price in whole rupees.
    pub price: i64,
    /// Derived per-month display price in whole rupees.
    pub monthly_price: i64,
}

impl PlanResponse {
    /// Creates a new instance of [`PlanResponse`].
    pub fn new(plan: PremiumPlan) -> Self {
        Self {
            id: plan,
            duration_days: plan.duration_days(),
            price: plan.price(),
            monthly_price: plan.monthly_price(),
        }
    }
}

impl From<PremiumPlan> for PlanResponse {
    fn from(plan: PremiumPlan) -> Self {
        Self::new(plan)
    }
}

/// Response returned after a successful premium activation.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResponse {
    /// Activated plan.
    pub premium_plan: PremiumPlan,
    /// Expiry of the new grant.
    pub premium_expires_at: Timestamp,
}
