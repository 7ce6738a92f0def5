//! Session-to-account bridge extractor.
//!
//! [`SessionAccount`] reconciles a verified external identity with the
//! internal account record: the account is looked up (and lazily created)
//! by an atomic upsert keyed on the provider subject, all under a deadline
//! guard. When the datastore is slow or unavailable the extractor degrades
//! to a transient view built purely from the identity token instead of
//! failing the login. Transient sessions report conservative defaults:
//! general role, onboarding unset, not premium.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use jiff::Timestamp;
use uuid::Uuid;
use vakil_core::guard::{self, Deadline};
use vakil_core::identity::ExternalIdentity;
use vakil_postgres::model::{Account, NewAccount};
use vakil_postgres::query::AccountRepository;
use vakil_postgres::types::{AccountRole, ProfileStage};
use vakil_postgres::PgClient;

use crate::extract::IdentityClaims;
use crate::extract::auth::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::IdentityKeys;

/// The internal account behind an authenticated session.
///
/// `Persisted` carries the datastore row; `Transient` is the degraded view
/// used while the datastore is unreachable. Guarded reads are best-effort
/// snapshots: a transient session only blocks actions that require
/// persisted state.
#[derive(Debug, Clone)]
pub enum SessionAccount {
    /// The account row as stored in the datastore.
    Persisted(Account),
    /// A non-persisted view built purely from the identity token.
    Transient(ExternalIdentity),
}

impl SessionAccount {
    /// Returns the account identifier, absent for a transient session.
    pub fn account_id(&self) -> Option<Uuid> {
        match self {
            Self::Persisted(account) => Some(account.id),
            Self::Transient(_) => None,
        }
    }

    /// Returns whether this session is degraded to a transient view.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// Returns the effective role; transient sessions are always general.
    pub fn role(&self) -> AccountRole {
        match self {
            Self::Persisted(account) => account.role,
            Self::Transient(_) => AccountRole::General,
        }
    }

    /// Returns the effective onboarding stage.
    pub fn profile_stage(&self) -> ProfileStage {
        match self {
            Self::Persisted(account) => account.profile_stage,
            Self::Transient(_) => ProfileStage::Unset,
        }
    }

    /// Recomputes whether the premium grant is active at `now`.
    pub fn premium_is_active(&self, now: Timestamp) -> bool {
        match self {
            Self::Persisted(account) => account.premium_is_active(now),
            Self::Transient(_) => false,
        }
    }

    /// Returns the premium expiry countdown in days, when one exists.
    pub fn premium_days_remaining(&self, now: Timestamp) -> Option<i64> {
        match self {
            Self::Persisted(account) => account.premium_days_remaining(now),
            Self::Transient(_) => None,
        }
    }

    /// Returns the email address on record.
    pub fn email_address(&self) -> &str {
        match self {
            Self::Persisted(account) => &account.email_address,
            Self::Transient(identity) => &identity.email_address,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Persisted(account) => &account.display_name,
            Self::Transient(identity) => &identity.display_name,
        }
    }

    /// Returns the avatar URL, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Self::Persisted(account) => account.avatar_url.as_deref(),
            Self::Transient(identity) => identity.avatar_url.as_deref(),
        }
    }

    /// Returns the persisted account, or a 503 for degraded sessions.
    ///
    /// Actions that must write persisted state cannot run against a
    /// transient view.
    pub fn persisted(&self) -> Result<&Account> {
        match self {
            Self::Persisted(account) => Ok(account),
            Self::Transient(_) => Err(ErrorKind::ServiceUnavailable
                .with_message("Account state is temporarily unavailable, try again shortly")
                .with_resource("account")),
        }
    }

    /// Requires the session to hold the administrator role.
    ///
    /// Transient sessions can never be administrators.
    pub fn require_admin(&self) -> Result<&Account> {
        match self {
            Self::Persisted(account) if account.role.is_administrator() => Ok(account),
            _ => Err(ErrorKind::Forbidden
                .with_message("Administrator role required")
                .with_resource("role")),
        }
    }

    /// Requires the session to hold at least the advocate role.
    pub fn require_advocate(&self) -> Result<&Account> {
        match self {
            Self::Persisted(account) if account.role.is_advocate() => Ok(account),
            _ => Err(ErrorKind::Forbidden
                .with_message("Advocate role required")
                .with_resource("role")),
        }
    }
}

/// Looks up or lazily provisions the account for an identity.
///
/// Errors are swallowed here on purpose: the caller treats `None` as the
/// signal to degrade to a transient session.
async fn resolve_account(pg_client: PgClient, identity: ExternalIdentity) -> Option<Account> {
    let outcome = async {
        let mut conn = pg_client.get_connection().await?;
        conn.upsert_account_by_subject(NewAccount {
            external_subject_id: identity.subject.clone(),
            email_address: identity.email_address.clone(),
            display_name: identity.display_name.clone(),
            avatar_url: identity.avatar_url.clone(),
        })
        .await
    }
    .await;

    match outcome {
        Ok(account) => Some(account),
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %error,
                transient = error.is_transient(),
                subject = %identity.subject,
                "account resolution failed, degrading to transient session"
            );
            None
        }
    }
}

impl<S> FromRequestParts<S> for SessionAccount
where
    S: Send + Sync,
    PgClient: FromRef<S>,
    IdentityKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Cached per request so repeated extraction hits the datastore once.
        if let Some(session) = parts.extensions.get::<Self>() {
            return Ok(session.clone());
        }

        let claims = IdentityClaims::from_request_parts(parts, state).await?;
        let identity = claims.into_identity();

        let pg_client = PgClient::from_ref(state);
        let resolved = guard::with_fallback(Deadline::STANDARD, None, {
            let identity = identity.clone();
            async move { resolve_account(pg_client, identity).await }
        })
        .await;

        let session = match resolved {
            Some(account) => {
                tracing::debug!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    account_id = %account.id,
                    "session resolved to persisted account"
                );
                Self::Persisted(account)
            }
            None => Self::Transient(identity),
        };

        parts.extensions.insert(session.clone());
        Ok(session)
    }
}

impl aide::OperationInput for SessionAccount {}
