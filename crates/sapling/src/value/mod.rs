//! Value representation for JSON-like data

mod container;
mod display;
mod equality;
mod hashable;
mod impls;
mod json;

pub use container::{Array, ContainerId, Object, ObjectKind};
pub use hashable::HashableValue;

use std::rc::Rc;

/// A loosely-typed, JSON-like value.
///
/// Values are organized into two tiers:
/// - Tier 1: Scalars and markers (copied by value)
/// - Tier 2: Containers (shared handles with instance identity)
///
/// Cloning a `Value` is a handle clone: a cloned `Array` or `Object` refers
/// to the same container instance. Use [`deep_clone`](crate::deep_clone) or
/// [`duplicate`](crate::duplicate) for independent copies.
#[derive(Clone, Default)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Scalars and Markers
    // ═══════════════════════════════════════════════════════════════════
    /// The absent marker. Counts as a scalar.
    #[default]
    Undefined,

    /// The null marker. Neither a scalar nor a container.
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Number (a single floating point type, as in JSON)
    Number(f64),

    /// Immutable text
    String(Rc<str>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Containers
    // ═══════════════════════════════════════════════════════════════════
    /// Ordered sequence
    Array(Array),

    /// Keyed mapping with an object category
    Object(Object),
}
