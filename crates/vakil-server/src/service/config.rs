//! App [`state`] configuration.
//!
//! [`state`]: crate::service::ServiceState

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vakil_core::Error;
use vakil_postgres::{PgClient, PgClientExt, PgConfig};

use crate::service::{IdentityKeys, Result};

/// Configuration for all external collaborators of the server.
///
/// With the `config` feature enabled this doubles as a clap argument group,
/// so every setting can come from CLI flags or environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Postgres connection and pool settings.
    #[cfg_attr(feature = "config", clap(flatten))]
    #[serde(flatten)]
    pub postgres: PgConfig,

    /// Expected issuer of identity-provider session tokens.
    #[cfg_attr(
        feature = "config",
        arg(long = "identity-issuer", env = "IDENTITY_ISSUER")
    )]
    pub identity_issuer: String,

    /// Expected audience of identity-provider session tokens.
    #[cfg_attr(
        feature = "config",
        arg(long = "identity-audience", env = "IDENTITY_AUDIENCE")
    )]
    pub identity_audience: String,

    /// Path to the identity provider's RS256 public key (PEM).
    #[cfg_attr(
        feature = "config",
        arg(
            long = "identity-public-key",
            env = "IDENTITY_PUBLIC_KEY",
            default_value = "./identity-public.pem"
        )
    )]
    pub identity_public_key: PathBuf,
}

impl ServiceConfig {
    /// Connects to the Postgres database and applies pending migrations.
    pub async fn connect_postgres(&self) -> Result<PgClient> {
        let pg_client = self.postgres.clone().build().map_err(|e| {
            Error::datastore()
                .with_message("failed to create database client")
                .with_source(e)
        })?;

        pg_client.run_pending_migrations().await.map_err(|e| {
            Error::datastore()
                .with_message("failed to apply database migrations")
                .with_source(e)
        })?;

        Ok(pg_client)
    }

    /// Loads the identity provider's verification keys.
    pub async fn load_identity_keys(&self) -> Result<IdentityKeys> {
        IdentityKeys::from_pem_file(
            &self.identity_public_key,
            &self.identity_issuer,
            &self.identity_audience,
        )
        .await
    }
}
