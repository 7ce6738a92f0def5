//! Verified claims from the identity provider's session token.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::decode;
use serde::{Deserialize, Serialize};
use vakil_core::identity::ExternalIdentity;

use crate::extract::auth::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::IdentityKeys;

/// Claims carried by the identity provider's RS256-signed session token.
///
/// Only claims the core consumes are modeled; anything else in the token is
/// ignored. Issuer and audience are pinned through [`IdentityKeys`] during
/// signature verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Issuer (who created the token).
    #[serde(rename = "iss")]
    pub issuer: String,
    /// Audience (who the token is intended for).
    #[serde(rename = "aud")]
    pub audience: String,
    /// Subject identifier, unique per identity.
    #[serde(rename = "sub")]
    pub subject: String,
    /// Expiration time as seconds since the Unix epoch.
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Email address as reported by the provider.
    pub email: String,
    /// Display name as reported by the provider.
    pub name: Option<String>,
    /// Avatar URL as reported by the provider.
    pub picture: Option<String>,
}

impl IdentityClaims {
    /// Parses and validates a session token from an Authorization header.
    ///
    /// Validation pins the issuer and audience configured in
    /// [`IdentityKeys`] and verifies the RS256 signature with the provider's
    /// public key.
    pub fn from_header(
        auth_header: &TypedHeader<Authorization<Bearer>>,
        identity_keys: &IdentityKeys,
    ) -> Result<Self> {
        let token_data = decode::<Self>(
            auth_header.token(),
            identity_keys.decoding_key(),
            &identity_keys.validation(),
        )
        .map_err(|error| {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %error,
                "identity token verification failed"
            );

            match error.kind() {
                JwtErrorKind::ExpiredSignature => ErrorKind::Unauthorized
                    .with_message("Authentication session has expired")
                    .with_resource("session"),
                JwtErrorKind::InvalidIssuer
                | JwtErrorKind::InvalidAudience
                | JwtErrorKind::InvalidSignature => ErrorKind::Unauthorized
                    .with_message("Authentication token was not accepted")
                    .with_resource("session"),
                _ => ErrorKind::MalformedAuthToken.into_error(),
            }
        })?;

        tracing::debug!(
            target: TRACING_TARGET_AUTHENTICATION,
            subject = %token_data.claims.subject,
            "identity token verified"
        );

        Ok(token_data.claims)
    }

    /// Converts the claims into the normalized [`ExternalIdentity`] value.
    ///
    /// A missing name falls back to the local part of the email address so
    /// a freshly provisioned account always has a display name.
    pub fn into_identity(self) -> ExternalIdentity {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_owned(),
        };

        ExternalIdentity::new(self.subject, &self.email, &name, self.picture)
    }
}

impl<S> FromRequestParts<S> for IdentityClaims
where
    S: Send + Sync,
    IdentityKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header =
            <TypedHeader<Authorization<Bearer>> as FromRequestParts<S>>::from_request_parts(
                parts, state,
            )
            .await
            .map_err(|_| ErrorKind::MissingAuthToken.into_error())?;

        let identity_keys = IdentityKeys::from_ref(state);
        Self::from_header(&auth_header, &identity_keys)
    }
}

impl aide::OperationInput for IdentityClaims {}
