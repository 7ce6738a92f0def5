//! Request types for all handlers.

mod admin;
mod premium;
mod profile;

pub use admin::RoleGrantRequest;
pub use premium::ActivatePremiumRequest;
pub use profile::{AvatarUpdateRequest, ProfileSetupRequest};
