//! Application state and dependency injection.

use vakil_postgres::PgClient;

use crate::service::{IdentityKeys, Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). Every external
/// dependency is constructed here and injected explicitly; no component
/// reaches for ambient global state.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    identity_keys: IdentityKeys,
}

impl ServiceState {
    /// Creates application state from already-connected dependencies.
    pub fn new(pg_client: PgClient, identity_keys: IdentityKeys) -> Self {
        Self {
            pg_client,
            identity_keys,
        }
    }

    /// Initializes application state from configuration.
    ///
    /// Connects to all external services and loads required resources.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres().await?,
            identity_keys: config.load_identity_keys().await?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(identity_keys: IdentityKeys);
