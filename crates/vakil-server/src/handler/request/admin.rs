//! Administrator grant/revoke request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload identifying the target of a role change.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrantRequest {
    /// Email address of the account whose role is changing.
    #[validate(email)]
    pub target_email: String,
}
