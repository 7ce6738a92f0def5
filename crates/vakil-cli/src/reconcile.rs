//! Duplicate-account reconciliation subcommand.
//!
//! Operator-invoked batch repair: loads every account ordered by creation
//! time, groups them by normalized email, and merges each multi-member
//! group into its deterministic keeper. Each group merges inside its own
//! transaction, so a failure in one group never aborts the rest of the
//! batch; the process exits non-zero if any group failed.

use anyhow::Context;
use uuid::Uuid;
use vakil_postgres::query::{MergeSummary, ReconcileRepository, group_by_email, select_keeper};

use crate::TRACING_TARGET_RECONCILE;
use crate::config::ReconcileArgs;

/// Runs the reconciliation batch to completion.
pub async fn run(args: ReconcileArgs) -> anyhow::Result<()> {
    let pg_client = args
        .postgres
        .build()
        .context("failed to create database client")?;
    let mut conn = pg_client
        .get_connection()
        .await
        .context("failed to acquire database connection")?;

    let accounts = conn
        .load_accounts_by_creation()
        .await
        .context("failed to load accounts")?;
    let total_accounts = accounts.len();

    let mut groups_merged = 0usize;
    let mut groups_failed = 0usize;

    for (email, members) in group_by_email(accounts) {
        if members.len() < 2 {
            continue;
        }

        let Some(keeper) = select_keeper(&members) else {
            continue;
        };
        let keeper_id = keeper.id;
        let loser_ids: Vec<Uuid> = members
            .iter()
            .filter(|member| member.id != keeper_id)
            .map(|member| member.id)
            .collect();

        match conn.merge_duplicate_group(keeper_id, loser_ids.clone()).await {
            Ok(references_moved) => {
                let summary = MergeSummary {
                    email: email.clone(),
                    keeper_id,
                    losers_merged: loser_ids.len(),
                    references_moved,
                };

                // Per-email audit line on the operator console.
                println!("{}", serde_json::to_string(&summary)?);

                tracing::info!(
                    target: TRACING_TARGET_RECONCILE,
                    email = %email,
                    keeper_id = %keeper_id,
                    losers_merged = loser_ids.len(),
                    references_moved,
                    "duplicate group merged"
                );
                groups_merged += 1;
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_RECONCILE,
                    email = %email,
                    keeper_id = %keeper_id,
                    error = %error,
                    "failed to merge duplicate group, transaction rolled back"
                );
                groups_failed += 1;
            }
        }
    }

    tracing::info!(
        target: TRACING_TARGET_RECONCILE,
        accounts = total_accounts,
        groups_merged,
        groups_failed,
        "reconciliation finished"
    );

    if groups_failed > 0 {
        anyhow::bail!("{groups_failed} duplicate group(s) failed to merge");
    }

    Ok(())
}
