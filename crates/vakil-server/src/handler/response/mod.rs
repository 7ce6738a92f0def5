//! Response types for all handlers.

mod account;
mod errors;
mod monitors;
mod premium;

pub use account::{AccountResponse, RoleResponse, SessionAccountResponse};
pub use errors::{ErrorResponse, ValidationErrorDetail};
pub use monitors::{HealthResponse, PoolStatusResponse};
pub use premium::{ActivationResponse, PlanResponse};
