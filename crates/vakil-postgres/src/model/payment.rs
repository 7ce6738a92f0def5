//! Payment record model.
//!
//! Payment rows are owned by exactly one account and are never mutated
//! after insert. They record the gateway confirmation that backed a premium
//! activation.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::payments;
use crate::types::PaymentStatus;

/// A payment row as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Owning account.
    pub account_id: Uuid,
    /// Charged amount.
    pub amount: BigDecimal,
    /// ISO currency code.
    pub currency: String,
    /// Gateway-reported status at record time.
    pub status: PaymentStatus,
    /// Gateway reference proving the charge.
    pub external_reference: String,
    /// Timestamp when the payment was recorded.
    pub created_at: Timestamp,
}

/// Data for recording a new payment.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPayment {
    /// Owning account.
    pub account_id: Uuid,
    /// Charged amount.
    pub amount: BigDecimal,
    /// ISO currency code.
    pub currency: String,
    /// Gateway-reported status.
    pub status: PaymentStatus,
    /// Gateway reference proving the charge.
    pub external_reference: String,
}
