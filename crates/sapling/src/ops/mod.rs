//! Structural operations over values
//!
//! Each module implements one family of operations:
//!
//! - [`scalar`]: terminal value detection
//! - [`copy`]: one-level array copy
//! - [`clone`]: recursive copy without identity tracking
//! - [`duplicate`]: recursive copy preserving cycles, sharing and categories
//! - [`path`]: dot-path get/set/delete
//! - [`merge`]: array union and field-wise object reduction

pub mod clone;
pub mod copy;
pub mod duplicate;
pub mod merge;
pub mod path;
pub mod scalar;

pub use clone::deep_clone;
pub use copy::copy;
pub use duplicate::{duplicate, duplicate_with, IdentityMap};
pub use merge::{merge, merge_objects};
pub use path::{delete_by_path, get_by_path, set_by_path, Path, Segment};
pub use scalar::is_scalar;
