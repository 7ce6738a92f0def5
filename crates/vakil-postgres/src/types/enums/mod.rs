//! Database enumeration types for type-safe queries.
//!
//! This module provides strongly-typed enumerations that correspond to PostgreSQL ENUM types
//! defined in the database schema. Each enumeration provides serialization support for APIs
//! and database integration through Diesel.

pub mod account_role;
pub mod payment_status;
pub mod premium_plan;
pub mod profile_stage;

pub use account_role::AccountRole;
pub use payment_status::PaymentStatus;
pub use premium_plan::PremiumPlan;
pub use profile_stage::ProfileStage;
