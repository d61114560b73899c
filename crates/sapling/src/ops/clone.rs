//! Recursive copy without identity tracking

use crate::{Object, Value};

/// Copy a value so that it shares no container with the original.
///
/// - Scalars and `Null` are returned unchanged.
/// - Arrays become new arrays with every item cloned in turn.
/// - Objects become new *plain* objects with the same own keys. The object
///   category is not carried over; use [`duplicate`](crate::duplicate) for that.
///
/// No visited set is kept. A container reachable twice is copied twice, and
/// a cyclic value recurses until the stack overflows. Use
/// [`duplicate`](crate::duplicate) for data that may contain cycles.
///
/// # Example
///
/// ```
/// use sapling::{deep_clone, Object, Value};
///
/// let original = Value::from(Object::new().with_field("list", vec![1, 2]));
/// let cloned = deep_clone(&original);
///
/// assert_eq!(cloned, original);
/// assert!(!cloned.ptr_eq(&original));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.to_vec().iter().map(deep_clone).collect()),
        Value::Object(fields) => {
            let copy = Object::new();
            for (key, field) in fields.entries() {
                copy.insert(key, deep_clone(&field));
            }
            Value::Object(copy)
        }
        _ => value.clone(),
    }
}
