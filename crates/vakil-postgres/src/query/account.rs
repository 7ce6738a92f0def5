//! Account repository for provisioning and managing accounts.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use crate::model::{Account, NewAccount, UpdateAccount};
use crate::types::AccountRole;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for account database operations.
///
/// Handles lazy provisioning from external identities, profile updates, and
/// the role grant/revoke paths.
pub trait AccountRepository {
    /// Provisions an account for an external identity, or returns the
    /// existing one.
    ///
    /// The insert is a single atomic `ON CONFLICT DO NOTHING` keyed on the
    /// subject identifier, so two near-simultaneous first logins for the
    /// same identity cannot create two rows.
    fn upsert_account_by_subject(
        &mut self,
        new_account: NewAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Finds an account by its unique identifier.
    fn find_account_by_id(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Finds an account by its identity-provider subject.
    fn find_account_by_subject(
        &mut self,
        subject: &str,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Finds an account by email address.
    ///
    /// The email is normalized before comparison; when historical duplicates
    /// share the address, the earliest-created row wins.
    fn find_account_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Updates an account with new information.
    ///
    /// Applies partial updates to an existing account. Only fields set
    /// to `Some(value)` will be modified.
    fn update_account(
        &mut self,
        account_id: Uuid,
        updates: UpdateAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Changes an account's role.
    fn set_account_role(
        &mut self,
        account_id: Uuid,
        role: AccountRole,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Counts accounts currently holding the administrator role.
    fn count_admins(&mut self) -> impl Future<Output = PgResult<i64>> + Send;
}

impl AccountRepository for PgConnection {
    async fn upsert_account_by_subject(&mut self, mut new_account: NewAccount) -> PgResult<Account> {
        use schema::accounts::{self, dsl};

        // Normalize fields: trim whitespace, lower-case email
        new_account.display_name = new_account.display_name.trim().to_owned();
        new_account.email_address = new_account.email_address.trim().to_lowercase();

        let inserted = diesel::insert_into(accounts::table)
            .values(&new_account)
            .on_conflict(dsl::external_subject_id)
            .do_nothing()
            .returning(Account::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        if let Some(account) = inserted {
            return Ok(account);
        }

        // The row already existed; the conflict target guarantees the fetch
        // finds it.
        let existing = self
            .find_account_by_subject(&new_account.external_subject_id)
            .await?;

        existing.ok_or_else(|| {
            PgError::Unexpected("account vanished between upsert and fetch".into())
        })
    }

    async fn find_account_by_id(&mut self, account_id: Uuid) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        accounts::table
            .filter(dsl::id.eq(account_id))
            .select(Account::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_account_by_subject(&mut self, subject: &str) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        accounts::table
            .filter(dsl::external_subject_id.eq(subject))
            .select(Account::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_account_by_email(&mut self, email: &str) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        accounts::table
            .filter(dsl::email_address.eq(email.trim().to_lowercase()))
            .order(dsl::created_at.asc())
            .select(Account::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_account(
        &mut self,
        account_id: Uuid,
        mut updates: UpdateAccount,
    ) -> PgResult<Account> {
        use schema::accounts::{self, dsl};

        // Normalize fields: trim whitespace
        if let Some(name) = updates.display_name.as_mut() {
            *name = name.trim().to_owned();
        }
        if let Some(city) = updates.city.as_mut() {
            *city = city.trim().to_owned();
        }
        updates
            .updated_at
            .get_or_insert(jiff_diesel::Timestamp::from(Timestamp::now()));

        diesel::update(accounts::table.filter(dsl::id.eq(account_id)))
            .set(&updates)
            .returning(Account::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn set_account_role(
        &mut self,
        account_id: Uuid,
        role: AccountRole,
    ) -> PgResult<Account> {
        self.update_account(
            account_id,
            UpdateAccount {
                role: Some(role),
                ..Default::default()
            },
        )
        .await
    }

    async fn count_admins(&mut self) -> PgResult<i64> {
        use schema::accounts::{self, dsl};

        accounts::table
            .filter(dsl::role.eq(AccountRole::Admin))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
