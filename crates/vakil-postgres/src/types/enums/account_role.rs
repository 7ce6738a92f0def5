//! Account role enumeration for the three-tier authorization model.

use std::cmp;

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role and permission level of an account.
///
/// This enumeration corresponds to the `ACCOUNT_ROLE` PostgreSQL enum. The
/// ordering is for display purposes only: an administrator is not a superset
/// of an advocate's domain fields.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[ExistingTypePath = "crate::schema::sql_types::AccountRole"]
pub enum AccountRole {
    /// Full administrative access; granted only by an existing administrator
    #[db_rename = "admin"]
    #[serde(rename = "admin")]
    Admin,

    /// Practicing advocate with a verified bar registration
    #[db_rename = "advocate"]
    #[serde(rename = "advocate")]
    Advocate,

    /// Default role for every newly provisioned account
    #[db_rename = "general"]
    #[serde(rename = "general")]
    #[default]
    General,
}

impl AccountRole {
    /// Returns whether this role has administrative privileges.
    #[inline]
    pub fn is_administrator(self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    /// Returns whether this role is at least an advocate.
    #[inline]
    pub fn is_advocate(self) -> bool {
        matches!(self, AccountRole::Advocate | AccountRole::Admin)
    }

    /// Returns the hierarchical level of this role (higher number = more permissions).
    #[inline]
    pub const fn hierarchy_level(self) -> u8 {
        match self {
            AccountRole::General => 1,
            AccountRole::Advocate => 2,
            AccountRole::Admin => 3,
        }
    }

    /// Returns whether this role has equal or higher permissions than the other role.
    #[inline]
    pub const fn has_permission_level_of(self, other: AccountRole) -> bool {
        self.hierarchy_level() >= other.hierarchy_level()
    }

    /// Returns the role an account falls back to when its administrator
    /// grant is revoked.
    ///
    /// The fallback must be computed at revoke time from the target's
    /// current bar registration, never cached from an earlier state.
    #[inline]
    pub const fn demotion_fallback(has_bar_registration: bool) -> Self {
        if has_bar_registration {
            AccountRole::Advocate
        } else {
            AccountRole::General
        }
    }
}

impl PartialOrd for AccountRole {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AccountRole {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.hierarchy_level().cmp(&other.hierarchy_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role_is_general() {
        assert_eq!(AccountRole::default(), AccountRole::General);
    }

    #[test]
    fn hierarchy_ordering() {
        assert!(AccountRole::General < AccountRole::Advocate);
        assert!(AccountRole::Advocate < AccountRole::Admin);
        assert!(AccountRole::Admin.has_permission_level_of(AccountRole::Advocate));
        assert!(!AccountRole::General.has_permission_level_of(AccountRole::Advocate));
    }

    #[test]
    fn demotion_falls_back_to_advocate_with_bar_registration() {
        assert_eq!(AccountRole::demotion_fallback(true), AccountRole::Advocate);
    }

    #[test]
    fn demotion_falls_back_to_general_without_bar_registration() {
        assert_eq!(AccountRole::demotion_fallback(false), AccountRole::General);
    }
}
