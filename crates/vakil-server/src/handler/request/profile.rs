//! Profile setup request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vakil_postgres::types::AccountRole;

/// Request payload for the profile-completion flow.
///
/// A submission may carry a partial set of fields; writes to earlier steps
/// remain accepted at any stage. Setting `finish` signals explicit
/// completion, which requires every advocate field to be present when the
/// declared role is advocate.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSetupRequest {
    /// Declared role; only general or advocate can be self-selected.
    pub role: AccountRole,

    /// First name (1-64 characters).
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    /// Last name (up to 64 characters).
    #[validate(length(max = 64))]
    pub last_name: Option<String>,

    /// Bar council registration number, e.g. `MH/123/2010`.
    #[validate(length(min = 1, max = 64))]
    pub bar_registration_no: Option<String>,

    /// Years of practice.
    #[validate(range(min = 0, max = 70))]
    pub years_of_experience: Option<i32>,

    /// City of practice.
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,

    /// Practice specializations.
    pub specializations: Option<Vec<String>>,

    /// Short biography (up to 2000 characters).
    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    /// Education and practice qualifications.
    pub education: Option<Vec<String>>,

    /// Languages spoken.
    pub languages: Option<Vec<String>>,

    /// Office address.
    #[validate(length(max = 300))]
    pub office_address: Option<String>,

    /// Explicit completion signal.
    #[serde(default)]
    pub finish: bool,
}

/// Request payload to update the avatar image.
///
/// Accepted at any onboarding stage without affecting progression.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpdateRequest {
    /// URL of the new avatar image.
    #[validate(length(min = 1, max = 2048))]
    pub avatar_url: String,
}
