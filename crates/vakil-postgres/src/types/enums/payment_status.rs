//! Payment status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle status of a payment record.
///
/// This enumeration corresponds to the `PAYMENT_STATUS` PostgreSQL enum.
/// Payment rows are immutable after insert; the status is recorded once at
/// creation from the gateway's confirmation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[ExistingTypePath = "crate::schema::sql_types::PaymentStatus"]
pub enum PaymentStatus {
    /// Charge initiated but not yet confirmed
    #[db_rename = "created"]
    #[serde(rename = "created")]
    #[default]
    Created,

    /// Gateway confirmed the charge succeeded
    #[db_rename = "succeeded"]
    #[serde(rename = "succeeded")]
    Succeeded,

    /// Gateway reported the charge failed
    #[db_rename = "failed"]
    #[serde(rename = "failed")]
    Failed,
}

impl PaymentStatus {
    /// Returns whether the charge was confirmed successful.
    #[inline]
    pub const fn is_settled(self) -> bool {
        matches!(self, PaymentStatus::Succeeded)
    }
}
