//! Error types for Sapling conversions
//!
//! The copy, duplicate, path and merge operations never fail: accessors report
//! failure through a `bool` and traversals short-circuit on absent values.
//! Errors only arise when leaving the `Value` model, e.g. converting to
//! `serde_json::Value`.

use thiserror::Error;

/// Main error type for Sapling operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaplingError {
    /// A container refers back to one of its ancestors
    #[error("Cyclic value: container at `{path}` refers to one of its ancestors")]
    CyclicValue {
        /// Dot-path of the field that closes the cycle
        path: String,
    },

    /// A number that has no JSON representation
    #[error("Non-finite number: {value}")]
    NonFiniteNumber {
        /// The offending number
        value: f64,
    },
}

/// Result type alias for Sapling operations
pub type Result<T> = std::result::Result<T, SaplingError>;
