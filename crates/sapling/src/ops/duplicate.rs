//! Cycle-safe recursive copy
//!
//! [`duplicate`] walks the value graph depth first. Every container is
//! registered in an [`IdentityMap`] *before* its fields are visited, so a
//! field that leads back to a container already on the way finds the
//! in-progress copy instead of recursing again. The same lookup preserves
//! sharing: a container reachable along two paths is copied once.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{Array, ContainerId, Object, ObjectKind, Value};

/// Original container to copy, keyed by instance identity.
///
/// Structurally equal but distinct containers get distinct entries. Each
/// entry also keeps a handle to the original, so no id can be reused by a
/// new allocation while the map is alive.
#[derive(Debug, Default)]
pub struct IdentityMap {
    copies: HashMap<ContainerId, (Value, Value)>,
}

impl IdentityMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered containers
    pub fn len(&self) -> usize {
        self.copies.len()
    }

    /// Check if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }

    /// The copy registered for `original`, if it is a container seen before
    pub fn get(&self, original: &Value) -> Option<Value> {
        let id = original.container_id()?;
        self.copies.get(&id).map(|(_, copy)| copy.clone())
    }

    /// Check if `original` has been registered
    pub fn contains(&self, original: &Value) -> bool {
        original
            .container_id()
            .is_some_and(|id| self.copies.contains_key(&id))
    }

    fn register(&mut self, id: ContainerId, original: &Value, copy: &Value) {
        trace!(?id, "registering container copy");
        self.copies.insert(id, (original.clone(), copy.clone()));
    }
}

/// Copy a value, preserving cycles, shared references and object categories.
///
/// - Scalars and `Null` are returned unchanged.
/// - Every distinct container reachable from `value` is copied exactly once.
///   Two fields that point at the same container in the input point at the
///   same new container in the output, and a field that points back at an
///   ancestor points at the ancestor's copy.
/// - Object categories are rebuilt: `Plain`, `Bare`, `Date` and `Pattern`
///   keep their category, `Named` categories become plain objects.
///
/// # Example
///
/// ```
/// use sapling::{duplicate, Object, Value};
///
/// let node = Object::new().with_field("name", "root");
/// node.insert("parent", Value::from(node.clone()));
///
/// let copy = duplicate(&Value::from(node.clone()));
/// let copied = copy.as_object().unwrap();
///
/// assert!(!copied.ptr_eq(&node));
/// assert!(copied.get("parent").unwrap().ptr_eq(&copy));
/// ```
pub fn duplicate(value: &Value) -> Value {
    duplicate_with(value, &mut IdentityMap::new())
}

/// Copy a value using a caller-owned identity map.
///
/// Duplicating several values with one map keeps the sharing *between* them:
/// a container reachable from two of them is copied once.
pub fn duplicate_with(value: &Value, copies: &mut IdentityMap) -> Value {
    if let Some(copy) = copies.get(value) {
        trace!(id = ?value.container_id(), "reusing container copy");
        return copy;
    }

    match value {
        Value::Array(original) => {
            let copy = Array::with_capacity(original.len());
            copies.register(original.id(), value, &Value::Array(copy.clone()));

            for index in 0..original.len() {
                let item = original.get(index).unwrap_or_default();
                copy.push(duplicate_with(&item, copies));
            }
            Value::Array(copy)
        }

        Value::Object(original) => {
            let copy = Object::with_kind(rebuild_kind(original.kind()));
            copies.register(original.id(), value, &Value::Object(copy.clone()));

            for (key, field) in original.entries() {
                copy.insert(key, duplicate_with(&field, copies));
            }
            Value::Object(copy)
        }

        _ => value.clone(),
    }
}

fn rebuild_kind(kind: ObjectKind) -> ObjectKind {
    match kind {
        ObjectKind::Named(name) => {
            debug!(kind = %name, "duplicating unknown object kind as a plain object");
            ObjectKind::Plain
        }
        kind => kind,
    }
}
