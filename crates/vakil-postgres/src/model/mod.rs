//! Database models for all entities in the system.

mod account;
mod payment;

pub use account::{Account, NewAccount, UpdateAccount};
pub use payment::{NewPayment, Payment};
