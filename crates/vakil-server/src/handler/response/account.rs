//! Account and session response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vakil_postgres::model::Account;
use vakil_postgres::types::{AccountRole, PremiumPlan, ProfileStage};

use crate::extract::SessionAccount;

/// Full account view returned by the profile endpoints.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Unique identifier of the account.
    pub account_id: Uuid,
    /// Email address associated with the account.
    pub email_address: String,
    /// Display name of the account holder.
    pub display_name: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Authorization role.
    pub role: AccountRole,
    /// Onboarding stage.
    pub profile_stage: ProfileStage,
    /// Whether onboarding has finished.
    pub is_verified: bool,
    /// Whether a premium plan is on record.
    pub is_premium: bool,
    /// The activated plan, if any.
    pub premium_plan: Option<PremiumPlan>,
    /// Premium expiry, if time-boxed.
    pub premium_expires_at: Option<Timestamp>,
    /// Bar registration number (advocates).
    pub bar_registration_no: Option<String>,
    /// Years of practice (advocates).
    pub years_of_experience: Option<i32>,
    /// City of practice (advocates).
    pub city: Option<String>,
    /// Practice specializations (advocates).
    pub specializations: Vec<String>,
    /// Short biography (advocates).
    pub bio: Option<String>,
    /// Education and practice qualifications (advocates).
    pub education: Vec<String>,
    /// Languages spoken (advocates).
    pub languages: Vec<String>,
    /// Office address (advocates).
    pub office_address: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
}

impl AccountResponse {
    /// Creates a new instance of [`AccountResponse`].
    pub fn from_model(account: Account) -> Self {
        Self {
            account_id: account.id,
            email_address: account.email_address,
            display_name: account.display_name,
            avatar_url: account.avatar_url,
            role: account.role,
            profile_stage: account.profile_stage,
            is_verified: account.is_verified,
            is_premium: account.is_premium,
            premium_plan: account.premium_plan,
            premium_expires_at: account.premium_expires_at.map(Into::into),
            bar_registration_no: account.bar_registration_no,
            years_of_experience: account.years_of_experience,
            city: account.city,
            specializations: account.specializations,
            bio: account.bio,
            education: account.education,
            languages: account.languages,
            office_address: account.office_address,
            created_at: account.created_at.into(),
            updated_at: account.updated_at.into(),
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self::from_model(account)
    }
}

/// Session view returned on every authenticated page load.
///
/// A degraded (transient) session reports conservative defaults: general
/// role, onboarding unset, not premium.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionAccountResponse {
    /// Unique identifier; absent for a transient session.
    pub account_id: Option<Uuid>,
    /// Whether this session view was built without datastore state.
    pub transient: bool,
    /// Effective authorization role.
    pub role: AccountRole,
    /// Effective onboarding stage.
    pub profile_stage: ProfileStage,
    /// Whether the premium grant is active right now.
    pub is_premium: bool,
    /// Expiry countdown in days; negative when lapsed.
    pub premium_days_remaining: Option<i64>,
    /// Display name shown in the UI.
    pub display_name: String,
    /// Email address on record.
    pub email_address: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
}

impl SessionAccountResponse {
    /// Builds the session view, recomputing premium status at `now`.
    pub fn new(session: &SessionAccount, now: Timestamp) -> Self {
        Self {
            account_id: session.account_id(),
            transient: session.is_transient(),
            role: session.role(),
            profile_stage: session.profile_stage(),
            is_premium: session.premium_is_active(now),
            premium_days_remaining: session.premium_days_remaining(now),
            display_name: session.display_name().to_owned(),
            email_address: session.email_address().to_owned(),
            avatar_url: session.avatar_url().map(ToOwned::to_owned),
        }
    }
}

/// Response returned by the administrator grant/revoke endpoints.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    /// Email address of the affected account.
    pub email_address: String,
    /// Role after the change.
    pub role: AccountRole,
}

impl RoleResponse {
    /// Creates a new instance of [`RoleResponse`].
    pub fn new(account: Account) -> Self {
        Self {
            email_address: account.email_address,
            role: account.role,
        }
    }
}

impl From<Account> for RoleResponse {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
