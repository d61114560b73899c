//! # Sapling
//!
//! Structural copy, duplication, dot-path access and merge helpers for
//! loosely-typed, JSON-like values.
//!
//! Values are scalars (`Undefined`, booleans, numbers, strings), the `Null`
//! marker, or containers (arrays and objects). Containers are shared handles
//! with instance identity, so a value can contain the same container twice or
//! even contain itself.
//!
//! ## Operations
//!
//! - [`is_scalar`]: terminal value detection
//! - [`copy`]: one-level array copy
//! - [`deep_clone`]: recursive copy, fast but cycle-unsafe
//! - [`duplicate`]: recursive copy preserving cycles, sharing and object
//!   categories
//! - [`get_by_path`], [`set_by_path`], [`delete_by_path`]: dot-path access
//! - [`merge`], [`merge_objects`]: array union and field-wise reduction
//!
//! ## Example
//!
//! ```
//! use sapling::{duplicate, get_by_path, set_by_path, Object, Value};
//!
//! let config = Value::from(Object::new());
//! set_by_path(&config, "server.port", Value::from(8080));
//!
//! let copy = duplicate(&config);
//! set_by_path(&copy, "server.port", Value::from(9090));
//!
//! assert_eq!(get_by_path(&config, "server.port"), Value::from(8080));
//! assert_eq!(get_by_path(&copy, "server.port"), Value::from(9090));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod ops;
pub mod value;

// Re-export main types
pub use context::AccessContext;
pub use error::{Result, SaplingError};
pub use ops::{
    copy, deep_clone, delete_by_path, duplicate, duplicate_with, get_by_path, is_scalar, merge,
    merge_objects, set_by_path, IdentityMap, Path, Segment,
};
pub use value::{Array, ContainerId, HashableValue, Object, ObjectKind, Value};

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
