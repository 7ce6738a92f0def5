//! Main account model for PostgreSQL database operations.
//!
//! The account is the internal record reconciled from an external identity.
//! It carries the three-tier role, the onboarding stage, the subscription
//! fields, and the advocate-only profile attributes.
//!
//! ## Models
//!
//! - [`Account`] - Full account row
//! - [`NewAccount`] - Data for provisioning an account on first login
//! - [`UpdateAccount`] - Partial update applied by the profile and admin paths

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::accounts;
use crate::types::{AccountRole, PremiumPlan, ProfileStage, enums::premium_plan};

/// An account row as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Identity-provider subject; set once at creation, never updated.
    pub external_subject_id: String,
    /// Primary email, stored trimmed and lower-cased.
    pub email_address: String,
    /// Human-readable name with normalized capitalization.
    pub display_name: String,
    /// Optional URL to a profile avatar image.
    pub avatar_url: Option<String>,
    /// Authorization role.
    pub role: AccountRole,
    /// Onboarding stage.
    pub profile_stage: ProfileStage,
    /// Set when onboarding completes; independent of the premium state.
    pub is_verified: bool,
    /// Whether a premium plan was activated for this account.
    pub is_premium: bool,
    /// The activated plan, if any.
    pub premium_plan: Option<PremiumPlan>,
    /// Expiry of the premium grant; `None` means a manual "active forever" grant.
    pub premium_expires_at: Option<Timestamp>,
    /// Gateway reference of the confirming payment.
    pub payment_reference: Option<String>,
    /// Bar council registration number (advocates only).
    pub bar_registration_no: Option<String>,
    /// Years of practice (advocates only).
    pub years_of_experience: Option<i32>,
    /// City of practice (advocates only).
    pub city: Option<String>,
    /// Practice specializations (advocates only).
    pub specializations: Vec<String>,
    /// Short biography (advocates only).
    pub bio: Option<String>,
    /// Education and practice qualifications (advocates only).
    pub education: Vec<String>,
    /// Languages spoken (advocates only).
    pub languages: Vec<String>,
    /// Office address (advocates only).
    pub office_address: Option<String>,
    /// Timestamp when the account was created; reconciliation tie-break.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
}

/// Data for provisioning a new account from an external identity.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccount {
    /// Identity-provider subject identifier.
    pub external_subject_id: String,
    /// Provider-supplied email (normalized on insert).
    pub email_address: String,
    /// Provider-supplied display name.
    pub display_name: String,
    /// Provider-supplied avatar URL.
    pub avatar_url: Option<String>,
}

/// Data for updating an account.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateAccount {
    /// Human-readable name.
    pub display_name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Authorization role.
    pub role: Option<AccountRole>,
    /// Onboarding stage.
    pub profile_stage: Option<ProfileStage>,
    /// Verification flag.
    pub is_verified: Option<bool>,
    /// Premium flag.
    pub is_premium: Option<bool>,
    /// Activated premium plan.
    pub premium_plan: Option<PremiumPlan>,
    /// Premium expiry timestamp.
    pub premium_expires_at: Option<Timestamp>,
    /// Gateway payment reference.
    pub payment_reference: Option<String>,
    /// Bar council registration number.
    pub bar_registration_no: Option<String>,
    /// Years of practice.
    pub years_of_experience: Option<i32>,
    /// City of practice.
    pub city: Option<String>,
    /// Practice specializations.
    pub specializations: Option<Vec<String>>,
    /// Short biography.
    pub bio: Option<String>,
    /// Education and practice qualifications.
    pub education: Option<Vec<String>>,
    /// Languages spoken.
    pub languages: Option<Vec<String>>,
    /// Office address.
    pub office_address: Option<String>,
    /// Timestamp of this update.
    pub updated_at: Option<Timestamp>,
}

impl Account {
    /// Returns whether the account has a bar registration on file.
    pub fn has_bar_registration(&self) -> bool {
        self.bar_registration_no
            .as_deref()
            .is_some_and(|bar_no| !bar_no.is_empty())
    }

    /// Returns whether onboarding has finished.
    pub fn is_profile_complete(&self) -> bool {
        self.profile_stage.is_complete()
    }

    /// Returns whether the premium grant is active at `now`.
    ///
    /// The stored `is_premium` flag alone is never authoritative: a lapsed
    /// expiry makes the grant inactive without any write having occurred.
    /// A missing expiry on a premium account is a manual "active forever"
    /// grant.
    pub fn premium_is_active(&self, now: jiff::Timestamp) -> bool {
        if !self.is_premium {
            return false;
        }

        match self.premium_expires_at {
            Some(expires_at) => jiff::Timestamp::from(expires_at) > now,
            None => true,
        }
    }

    /// Returns the expiry countdown in whole days, rounded up.
    ///
    /// Negative values signal a lapsed grant. `None` when the account has no
    /// expiry on record.
    pub fn premium_days_remaining(&self, now: jiff::Timestamp) -> Option<i64> {
        self.premium_expires_at
            .map(|expires_at| premium_plan::days_remaining(expires_at.into(), now))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Span;

    use super::*;

    fn account() -> Account {
        let now = jiff::Timestamp::now();
        Account {
            id: Uuid::new_v4(),
            external_subject_id: "auth0|test".to_owned(),
            email_address: "test@example.com".to_owned(),
            display_name: "Test Account".to_owned(),
            avatar_url: None,
            role: AccountRole::General,
            profile_stage: ProfileStage::Unset,
            is_verified: false,
            is_premium: false,
            premium_plan: None,
            premium_expires_at: None,
            payment_reference: None,
            bar_registration_no: None,
            years_of_experience: None,
            city: None,
            specializations: vec![],
            bio: None,
            education: vec![],
            languages: vec![],
            office_address: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn premium_inactive_without_flag() {
        let now = jiff::Timestamp::now();
        let mut account = account();
        account.premium_expires_at = Some((now + Span::new().hours(30 * 24)).into());
        assert!(!account.premium_is_active(now));
    }

    #[test]
    fn premium_active_until_expiry() {
        let now = jiff::Timestamp::now();
        let mut account = account();
        account.is_premium = true;
        account.premium_expires_at = Some((now + Span::new().hours(30 * 24)).into());

        assert!(account.premium_is_active(now));
        assert!(!account.premium_is_active(now + Span::new().hours(31 * 24)));
    }

    #[test]
    fn premium_without_expiry_is_active_forever() {
        let now = jiff::Timestamp::now();
        let mut account = account();
        account.is_premium = true;
        account.premium_expires_at = None;

        assert!(account.premium_is_active(now));
        assert!(account.premium_is_active(now + Span::new().hours(10_000 * 24)));
        assert_eq!(account.premium_days_remaining(now), None);
    }

    #[test]
    fn empty_bar_number_does_not_count_as_registration() {
        let mut account = account();
        assert!(!account.has_bar_registration());

        account.bar_registration_no = Some(String::new());
        assert!(!account.has_bar_registration());

        account.bar_registration_no = Some("MH/123/2010".to_owned());
        assert!(account.has_bar_registration());
    }
}
