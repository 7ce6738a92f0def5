//! HTTP request extractors.
//!
//! # Extractor Categories
//!
//! ## Authentication
//!
//! - [`IdentityClaims`] - verified claims from the identity provider's token
//! - [`SessionAccount`] - the internal account reconciled from the session
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//!
//! ## Connection
//!
//! - [`PgPool`] - a pooled database connection

pub mod auth;
pub mod reject;

mod pg_connection;

pub use crate::extract::auth::{IdentityClaims, SessionAccount};
pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, ValidateJson};
