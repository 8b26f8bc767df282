//! Utility types and functions for nixpy.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`optional`] - Tri-state optional field assignment
//! - [`logging`] - Opt-in tracing subscriber

mod error;
pub mod logging;
pub mod optional;

pub use error::*;
