//! Duplicate-account reconciliation.
//!
//! Account creation is keyed on the identity-provider subject, not the email
//! address, so historical data can contain several accounts sharing one
//! email. This module provides the repair path: group accounts by normalized
//! email, pick a deterministic keeper per group, migrate every dependent
//! record from the losers to the keeper inside one transaction, then delete
//! the losers.
//!
//! The procedure is idempotent: a second run finds no multi-member groups.

use std::collections::BTreeMap;
use std::future::Future;

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::Serialize;
use uuid::Uuid;

use crate::model::Account;
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Per-email audit summary of a completed merge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    /// Normalized email shared by the merged group.
    pub email: String,
    /// The surviving account.
    pub keeper_id: Uuid,
    /// Number of duplicate accounts deleted.
    pub losers_merged: usize,
    /// Number of dependent records rewritten to the keeper.
    pub references_moved: usize,
}

/// Groups accounts by normalized email, preserving the input order within
/// each group.
///
/// Callers pass rows ordered by `created_at` ascending so that group members
/// stay in creation order for the keeper tie-break.
pub fn group_by_email(accounts: Vec<Account>) -> BTreeMap<String, Vec<Account>> {
    let mut groups: BTreeMap<String, Vec<Account>> = BTreeMap::new();
    for account in accounts {
        let email = account.email_address.trim().to_lowercase();
        groups.entry(email).or_default().push(account);
    }
    groups
}

/// Selects the surviving account of a duplicate group.
///
/// The tie-break is deterministic: prefer a completed profile over an
/// incomplete one; among equals the earliest `created_at` wins. Members must
/// be ordered by `created_at` ascending.
pub fn select_keeper(members: &[Account]) -> Option<&Account> {
    members
        .iter()
        .find(|account| account.is_profile_complete())
        .or_else(|| members.first())
}

/// Repository for the duplicate-account repair procedure.
pub trait ReconcileRepository {
    /// Loads every account ordered by creation time, oldest first.
    fn load_accounts_by_creation(&mut self) -> impl Future<Output = PgResult<Vec<Account>>> + Send;

    /// Migrates all dependent records from the losers to the keeper and
    /// deletes the losers, all inside one transaction.
    ///
    /// Every reference rewrite happens before the delete, so a crash
    /// mid-merge rolls back rather than orphaning dependent records.
    /// Returns the number of dependent records rewritten.
    fn merge_duplicate_group(
        &mut self,
        keeper_id: Uuid,
        loser_ids: Vec<Uuid>,
    ) -> impl Future<Output = PgResult<usize>> + Send;
}

impl ReconcileRepository for PgConnection {
    async fn load_accounts_by_creation(&mut self) -> PgResult<Vec<Account>> {
        use schema::accounts::{self, dsl};

        accounts::table
            .order(dsl::created_at.asc())
            .select(Account::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn merge_duplicate_group(
        &mut self,
        keeper_id: Uuid,
        loser_ids: Vec<Uuid>,
    ) -> PgResult<usize> {
        use schema::{accounts, articles, media_files, meetings, payments};

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            keeper_id = %keeper_id,
            losers = loser_ids.len(),
            "merging duplicate account group"
        );

        self.transaction::<usize, PgError, _>(|conn| {
            async move {
                let mut moved = 0;

                moved += diesel::update(
                    articles::table.filter(articles::dsl::author_id.eq_any(&loser_ids)),
                )
                .set(articles::dsl::author_id.eq(keeper_id))
                .execute(conn)
                .await?;

                moved += diesel::update(
                    meetings::table.filter(meetings::dsl::host_id.eq_any(&loser_ids)),
                )
                .set(meetings::dsl::host_id.eq(keeper_id))
                .execute(conn)
                .await?;

                moved += diesel::update(
                    media_files::table.filter(media_files::dsl::owner_id.eq_any(&loser_ids)),
                )
                .set(media_files::dsl::owner_id.eq(keeper_id))
                .execute(conn)
                .await?;

                moved += diesel::update(
                    payments::table.filter(payments::dsl::account_id.eq_any(&loser_ids)),
                )
                .set(payments::dsl::account_id.eq(keeper_id))
                .execute(conn)
                .await?;

                diesel::delete(accounts::table.filter(accounts::dsl::id.eq_any(&loser_ids)))
                    .execute(conn)
                    .await?;

                Ok(moved)
            }
            .scope_boxed()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Span, Timestamp};

    use super::*;
    use crate::types::{AccountRole, ProfileStage};

    fn account(email: &str, stage: ProfileStage, created_at: Timestamp) -> Account {
        Account {
            id: Uuid::new_v4(),
            external_subject_id: format!("auth0|{}", Uuid::new_v4()),
            email_address: email.to_owned(),
            display_name: "Test Account".to_owned(),
            avatar_url: None,
            role: AccountRole::General,
            profile_stage: stage,
            is_verified: stage.is_complete(),
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
            created_at: created_at.into(),
            updated_at: created_at.into(),
        }
    }

    #[test]
    fn grouping_normalizes_email_case() {
        let now = Timestamp::now();
        let accounts = vec![
            account("a@x.com", ProfileStage::Unset, now),
            account("A@X.com", ProfileStage::Unset, now + Span::new().hours(1)),
            account("b@x.com", ProfileStage::Unset, now),
        ];

        let groups = group_by_email(accounts);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["a@x.com"].len(), 2);
        assert_eq!(groups["b@x.com"].len(), 1);
    }

    #[test]
    fn keeper_prefers_completed_profile_over_creation_order() {
        let t1 = Timestamp::now();
        let t2 = t1 + Span::new().hours(1);
        let t3 = t2 + Span::new().hours(1);

        let members = vec![
            account("a@x.com", ProfileStage::Unset, t1),
            account("a@x.com", ProfileStage::Complete, t2),
            account("a@x.com", ProfileStage::Unset, t3),
        ];

        let keeper = select_keeper(&members).unwrap();
        assert_eq!(keeper.id, members[1].id);
    }

    #[test]
    fn keeper_falls_back_to_earliest_created() {
        let t1 = Timestamp::now();
        let t2 = t1 + Span::new().hours(1);

        let members = vec![
            account("a@x.com", ProfileStage::RoleSelected, t1),
            account("a@x.com", ProfileStage::DetailsComplete, t2),
        ];

        let keeper = select_keeper(&members).unwrap();
        assert_eq!(keeper.id, members[0].id);
    }

    #[test]
    fn keeper_of_empty_group_is_none() {
        assert!(select_keeper(&[]).is_none());
    }

    #[test]
    fn first_complete_member_wins_among_several() {
        let t1 = Timestamp::now();
        let t2 = t1 + Span::new().hours(1);

        let members = vec![
            account("a@x.com", ProfileStage::Complete, t1),
            account("a@x.com", ProfileStage::Complete, t2),
        ];

        let keeper = select_keeper(&members).unwrap();
        assert_eq!(keeper.id, members[0].id);
    }
}
