//! Mathf Core - Fundamental types
//!
//! This crate provides the types shared across the plugin:
//! - `Value`: Scalar values crossing the script VM boundary
//! - `CallError`: Structured errors for bad host calls
//! - `epsilon()`: Process-wide comparison tolerance

mod epsilon;
mod error;
mod value;

pub use epsilon::{epsilon, FLOAT_MIN_DENORMAL, FLOAT_MIN_NORMAL};
pub use error::CallError;
pub use value::{Value, ValueType};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{epsilon, CallError, Value, ValueType};
}
