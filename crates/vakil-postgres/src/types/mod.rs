//! Database type definitions shared across models and queries.

pub mod enums;

pub use enums::{AccountRole, PaymentStatus, PremiumPlan, ProfileStage};
