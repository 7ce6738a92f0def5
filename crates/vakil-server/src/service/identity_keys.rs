//! Verification material for the identity provider's session tokens.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use vakil_core::Error;

use crate::service::Result;

/// Public key material and pinned issuer/audience for token verification.
///
/// Loaded once at startup and cloned into every request through the state.
#[derive(Clone)]
pub struct IdentityKeys {
    decoding_key: Arc<DecodingKey>,
    issuer: String,
    audience: String,
}

impl IdentityKeys {
    /// Creates identity keys from an already-parsed decoding key.
    pub fn new(
        decoding_key: DecodingKey,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            decoding_key: Arc::new(decoding_key),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Loads the provider's RS256 public key from a PEM file.
    pub async fn from_pem_file(
        path: &Path,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self> {
        let pem = tokio::fs::read(path).await.map_err(|e| {
            Error::configuration()
                .with_message(format!(
                    "failed to read identity public key from {}",
                    path.display()
                ))
                .with_source(e)
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(&pem).map_err(|e| {
            Error::configuration()
                .with_message("identity public key is not a valid RSA PEM")
                .with_source(e)
        })?;

        Ok(Self::new(decoding_key, issuer, audience))
    }

    /// Returns the decoding key for signature verification.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the expected token issuer.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Returns the expected token audience.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Builds the validation rules applied to every session token.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["iss", "aud", "sub", "exp"]);
        validation
    }
}

impl fmt::Debug for IdentityKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityKeys")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
