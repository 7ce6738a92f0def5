//! Premium subscription plan catalog.

use diesel_derive_enum::DbEnum;
use jiff::{Span, Timestamp};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Seconds in one day, used for the expiry countdown.
const SECS_PER_DAY: i64 = 86_400;

/// A paid subscription plan from the fixed catalog.
///
/// This enumeration corresponds to the `PREMIUM_PLAN` PostgreSQL enum. The
/// catalog is fixed at build time; prices are integer rupees.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[ExistingTypePath = "crate::schema::sql_types::PremiumPlan"]
pub enum PremiumPlan {
    /// 30-day plan
    #[db_rename = "monthly"]
    #[serde(rename = "monthly")]
    Monthly,

    /// 180-day plan
    #[db_rename = "half_yearly"]
    #[serde(rename = "halfYearly")]
    HalfYearly,

    /// 365-day plan
    #[db_rename = "yearly"]
    #[serde(rename = "yearly")]
    Yearly,

    /// 1095-day plan
    #[db_rename = "three_years"]
    #[serde(rename = "threeYears")]
    ThreeYears,
}

impl PremiumPlan {
    /// Returns the subscription duration in days.
    #[inline]
    pub const fn duration_days(self) -> i64 {
        match self {
            PremiumPlan::Monthly => 30,
            PremiumPlan::HalfYearly => 180,
            PremiumPlan::Yearly => 365,
            PremiumPlan::ThreeYears => 1095,
        }
    }

    /// Returns the plan price in whole rupees.
    #[inline]
    pub const fn price(self) -> i64 {
        match self {
            PremiumPlan::Monthly => 499,
            PremiumPlan::HalfYearly => 2694,
            PremiumPlan::Yearly => 4788,
            PremiumPlan::ThreeYears => 10764,
        }
    }

    /// Returns the number of billing months the plan covers.
    #[inline]
    const fn months(self) -> i64 {
        match self {
            PremiumPlan::Monthly => 1,
            PremiumPlan::HalfYearly => 6,
            PremiumPlan::Yearly => 12,
            PremiumPlan::ThreeYears => 36,
        }
    }

    /// Returns the per-month display price in whole rupees.
    #[inline]
    pub const fn monthly_price(self) -> i64 {
        self.price() / self.months()
    }

    /// Computes the expiry timestamp for an activation at `now`.
    pub fn expiry_from(self, now: Timestamp) -> Timestamp {
        now + Span::new().hours(self.duration_days() * 24)
    }
}

/// Computes the expiry countdown as whole days, rounded up.
///
/// A negative result signals a lapsed subscription. Callers must recompute
/// this at read time rather than trusting any stored flag.
pub fn days_remaining(expires_at: Timestamp, now: Timestamp) -> i64 {
    let secs = expires_at.duration_since(now).as_secs();
    let days = secs.div_euclid(SECS_PER_DAY);
    if secs.rem_euclid(SECS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_expiry_is_exactly_365_days_out() {
        let now = Timestamp::now();
        let expiry = PremiumPlan::Yearly.expiry_from(now);
        assert_eq!(expiry.duration_since(now).as_secs(), 365 * SECS_PER_DAY);
    }

    #[test]
    fn monthly_prices_descend_with_commitment() {
        assert_eq!(PremiumPlan::Monthly.monthly_price(), 499);
        assert_eq!(PremiumPlan::HalfYearly.monthly_price(), 449);
        assert_eq!(PremiumPlan::Yearly.monthly_price(), 399);
        assert_eq!(PremiumPlan::ThreeYears.monthly_price(), 299);
    }

    #[test]
    fn days_remaining_rounds_up() {
        let now = Timestamp::now();
        let in_one_hour = now + Span::new().hours(1);
        assert_eq!(days_remaining(in_one_hour, now), 1);

        let in_ten_days = now + Span::new().hours(10 * 24);
        assert_eq!(days_remaining(in_ten_days, now), 10);
    }

    #[test]
    fn days_remaining_goes_negative_after_lapse() {
        let now = Timestamp::now();
        let one_hour_ago = now - Span::new().hours(1);
        assert_eq!(days_remaining(one_hour_ago, now), 0);

        let two_days_ago = now - Span::new().hours(2 * 24);
        assert_eq!(days_remaining(two_days_ago, now), -2);
    }

    #[test]
    fn plan_parses_from_wire_name() {
        use std::str::FromStr;

        assert_eq!(
            PremiumPlan::from_str("three_years").unwrap(),
            PremiumPlan::ThreeYears
        );
        assert!(PremiumPlan::from_str("weekly").is_err());
    }
}
