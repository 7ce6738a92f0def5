//! Database query repositories for all entities in the system.
//!
//! This module contains repository implementations that provide high-level
//! database operations for accounts, payments, and the duplicate-account
//! reconciler, encapsulating common patterns behind type-safe interfaces.

pub mod account;
pub mod payment;
pub mod reconcile;

pub use account::AccountRepository;
pub use payment::PaymentRepository;
pub use reconcile::{MergeSummary, ReconcileRepository, group_by_email, select_keeper};
