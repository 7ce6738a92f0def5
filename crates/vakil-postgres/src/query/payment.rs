//! Payment repository.
//!
//! Payments are insert-only: rows are created when the gateway confirms a
//! charge and never mutated afterwards.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewPayment, Payment};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for payment database operations.
pub trait PaymentRepository {
    /// Records a new payment for an account.
    fn create_payment(
        &mut self,
        new_payment: NewPayment,
    ) -> impl Future<Output = PgResult<Payment>> + Send;

    /// Lists all payments recorded for an account, most recent first.
    fn list_payments_for_account(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<Payment>>> + Send;
}

impl PaymentRepository for PgConnection {
    async fn create_payment(&mut self, new_payment: NewPayment) -> PgResult<Payment> {
        use schema::payments;

        diesel::insert_into(payments::table)
            .values(&new_payment)
            .returning(Payment::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_payments_for_account(&mut self, account_id: Uuid) -> PgResult<Vec<Payment>> {
        use schema::payments::{self, dsl};

        payments::table
            .filter(dsl::account_id.eq(account_id))
            .order(dsl::created_at.desc())
            .select(Payment::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }
}
