//! Service state, configuration and dependency injection.

mod config;
mod identity_keys;
mod state;

pub use config::ServiceConfig;
pub use identity_keys::IdentityKeys;
pub use state::ServiceState;

/// Result alias for service initialization paths.
pub type Result<T> = vakil_core::Result<T>;
