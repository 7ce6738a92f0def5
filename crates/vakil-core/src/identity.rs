//! External identity value types.
//!
//! The platform never issues credentials itself. After the identity provider
//! authenticates a user, its verified session is handed to the server as an
//! [`ExternalIdentity`], which the session bridge reconciles with the
//! internal account record.

use serde::{Deserialize, Serialize};

/// A verified identity supplied by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExternalIdentity {
    /// Opaque subject identifier, unique per identity.
    pub subject: String,
    /// Email address as reported by the provider.
    pub email_address: String,
    /// Display name as reported by the provider.
    pub display_name: String,
    /// Optional avatar URL.
    pub avatar_url: Option<String>,
}

impl ExternalIdentity {
    /// Creates a new external identity, normalizing the email and name.
    pub fn new(
        subject: impl Into<String>,
        email_address: &str,
        display_name: &str,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            email_address: normalize_email(email_address),
            display_name: normalize_display_name(display_name),
            avatar_url,
        }
    }
}

/// Lower-cases and trims an email address.
///
/// Every path that groups or compares accounts by email must go through
/// this function, since the stored column is intended-unique but not
/// enforced by a database constraint.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalizes capitalization of a display name.
///
/// `jane SMITH` becomes `Jane Smith`. Interior whitespace is collapsed.
pub fn normalize_display_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a display name from separate first and last names.
pub fn display_name_from_parts(first_name: &str, last_name: &str) -> String {
    normalize_display_name(&format!("{} {}", first_name.trim(), last_name.trim()))
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_normalization() {
        assert_eq!(normalize_email("  Jane.Smith@Example.COM "), "jane.smith@example.com");
    }

    #[test]
    fn display_name_normalization() {
        assert_eq!(normalize_display_name("jane SMITH"), "Jane Smith");
        assert_eq!(normalize_display_name("  ravi   kumar  "), "Ravi Kumar");
        assert_eq!(normalize_display_name(""), "");
    }

    #[test]
    fn display_name_from_first_and_last() {
        assert_eq!(display_name_from_parts("priya", "SHARMA"), "Priya Sharma");
    }

    #[test]
    fn identity_normalizes_on_construction() {
        let identity = ExternalIdentity::new(
            "auth0|12345",
            "Ravi@Example.com",
            "ravi kumar",
            None,
        );
        assert_eq!(identity.email_address, "ravi@example.com");
        assert_eq!(identity.display_name, "Ravi Kumar");
    }
}
