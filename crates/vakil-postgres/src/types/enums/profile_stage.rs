//! Profile completion stages for the onboarding flow.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The stage an account has reached in the onboarding sequence.
///
/// This enumeration corresponds to the `PROFILE_STAGE` PostgreSQL enum.
/// Stages only ever move forward: `unset` → `role_selected` →
/// `details_complete` → `complete`. The terminal stage is reached through an
/// explicit finish signal, never implicitly.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[ExistingTypePath = "crate::schema::sql_types::ProfileStage"]
pub enum ProfileStage {
    /// Freshly provisioned; no role chosen yet
    #[db_rename = "unset"]
    #[serde(rename = "unset")]
    #[default]
    Unset,

    /// The user has declared whether they are a general user or an advocate
    #[db_rename = "role_selected"]
    #[serde(rename = "roleSelected")]
    RoleSelected,

    /// All role-specific fields have been persisted
    #[db_rename = "details_complete"]
    #[serde(rename = "detailsComplete")]
    DetailsComplete,

    /// Onboarding finished; fields remain editable in place
    #[db_rename = "complete"]
    #[serde(rename = "complete")]
    Complete,
}

impl ProfileStage {
    /// Returns the ordinal position of this stage in the onboarding sequence.
    #[inline]
    pub const fn step(self) -> u8 {
        match self {
            ProfileStage::Unset => 0,
            ProfileStage::RoleSelected => 1,
            ProfileStage::DetailsComplete => 2,
            ProfileStage::Complete => 3,
        }
    }

    /// Returns whether onboarding has finished.
    #[inline]
    pub const fn is_complete(self) -> bool {
        matches!(self, ProfileStage::Complete)
    }

    /// Applies the transition table and returns the resulting stage.
    ///
    /// Transitions never regress: a request for an earlier stage yields the
    /// current stage unchanged. The terminal stage is reachable from any
    /// stage (the finish signal), while other stages can only be entered
    /// from their immediate predecessor.
    pub fn advance_to(self, requested: ProfileStage) -> ProfileStage {
        if requested.step() <= self.step() {
            return self;
        }

        match requested {
            ProfileStage::Complete => ProfileStage::Complete,
            _ if requested.step() == self.step() + 1 => requested,
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn stages_never_regress() {
        for current in ProfileStage::iter() {
            for requested in ProfileStage::iter() {
                let next = current.advance_to(requested);
                assert!(
                    next.step() >= current.step(),
                    "{current} regressed to {next}"
                );
            }
        }
    }

    #[test]
    fn stages_advance_one_step_at_a_time() {
        assert_eq!(
            ProfileStage::Unset.advance_to(ProfileStage::RoleSelected),
            ProfileStage::RoleSelected
        );
        assert_eq!(
            ProfileStage::RoleSelected.advance_to(ProfileStage::DetailsComplete),
            ProfileStage::DetailsComplete
        );
        // Skipping ahead to a non-terminal stage is rejected.
        assert_eq!(
            ProfileStage::Unset.advance_to(ProfileStage::DetailsComplete),
            ProfileStage::Unset
        );
    }

    #[test]
    fn finish_is_reachable_from_any_stage() {
        for current in ProfileStage::iter() {
            assert_eq!(
                current.advance_to(ProfileStage::Complete),
                ProfileStage::Complete
            );
        }
    }

    #[test]
    fn complete_is_terminal() {
        for requested in ProfileStage::iter() {
            assert_eq!(
                ProfileStage::Complete.advance_to(requested),
                ProfileStage::Complete
            );
        }
    }
}
