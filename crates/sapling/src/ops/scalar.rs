//! Scalar detection

use crate::Value;

/// Check whether a value is terminal: never recursed into by the copy
/// operations.
///
/// Booleans, numbers, strings and `Undefined` are scalar. `Null` is not a
/// scalar, and neither is a container; the copy operations still return
/// `Null` unchanged.
///
/// # Example
///
/// ```
/// use sapling::{is_scalar, Object, Value};
///
/// assert!(is_scalar(&Value::Undefined));
/// assert!(is_scalar(&Value::from(5)));
/// assert!(!is_scalar(&Value::Null));
/// assert!(!is_scalar(&Value::from(Object::new())));
/// ```
pub fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}
