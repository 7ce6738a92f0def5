//! Premium activation request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload to activate a premium plan.
///
/// The payment reference is trusted as-is: the charge must already have been
/// confirmed with the payment gateway before this endpoint is invoked.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePremiumRequest {
    /// Catalog plan identifier, e.g. `yearly`.
    #[validate(length(min = 1, max = 32))]
    pub plan_id: String,

    /// Gateway reference proving the confirmed charge.
    #[validate(length(min = 1, max = 128))]
    pub payment_reference: String,
}
