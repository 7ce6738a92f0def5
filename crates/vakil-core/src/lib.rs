#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for deadline-guard operations.
pub const TRACING_TARGET_GUARD: &str = "vakil_core::guard";

mod error;

pub mod guard;
pub mod identity;

pub use error::{BoxedError, Error, ErrorKind, Result};
