//! Array union and field-wise object reduction

use indexmap::{IndexMap, IndexSet};

use crate::{Array, HashableValue, Object, Value};

/// Union of the given values, each kept once.
///
/// Array arguments contribute their items; any other argument contributes
/// itself. Items compare by same-value-zero (see [`HashableValue`]), so
/// containers are only merged when they are the same instance. The result
/// keeps first-occurrence order.
///
/// # Example
///
/// ```
/// use sapling::{merge, Value};
///
/// let merged = merge(&[Value::from(vec![1, 2]), Value::from(vec![2, 3])]);
/// assert_eq!(merged.to_vec(), vec![Value::from(1), Value::from(2), Value::from(3)]);
/// ```
pub fn merge(values: &[Value]) -> Array {
    let mut seen = IndexSet::new();
    for value in values {
        match value {
            Value::Array(items) => seen.extend(items.to_vec().into_iter().map(HashableValue)),
            other => {
                seen.insert(HashableValue(other.clone()));
            }
        }
    }
    seen.into_iter().map(HashableValue::into_inner).collect()
}

/// Combine objects key by key.
///
/// For every key present in any of `objects` (in first-seen order), the
/// combiner receives that key's value from each object in input order, with
/// `Undefined` where an object lacks the key. Its return value becomes the
/// field of the new plain object.
///
/// # Example
///
/// ```
/// use sapling::{merge_objects, Object, Value};
///
/// let sum = |values: &[Value]| {
///     Value::from(values.iter().filter_map(Value::as_f64).sum::<f64>())
/// };
/// let merged = merge_objects(
///     sum,
///     &[
///         Object::new().with_field("a", 1).with_field("b", 2),
///         Object::new().with_field("b", 3).with_field("c", 4),
///     ],
/// );
/// assert_eq!(merged.get("b"), Some(Value::from(5)));
/// ```
pub fn merge_objects<F>(mut combiner: F, objects: &[Object]) -> Object
where
    F: FnMut(&[Value]) -> Value,
{
    let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
    for (position, object) in objects.iter().enumerate() {
        for (key, value) in object.entries() {
            let column = columns
                .entry(key)
                .or_insert_with(|| vec![Value::Undefined; objects.len()]);
            column[position] = value;
        }
    }

    let merged = Object::new();
    for (key, args) in columns {
        merged.insert(key, combiner(&args));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_flattens_one_level() {
        let nested = Value::from(vec![9]);
        let merged = merge(&[
            Value::array(vec![Value::from(1), nested.clone()]),
            Value::from(2),
        ]);
        assert_eq!(merged.len(), 3);
        assert!(merged.get(1).unwrap().ptr_eq(&nested));
        assert_eq!(merged.get(2), Some(Value::from(2)));
    }

    #[test]
    fn test_merge_containers_by_identity() {
        let shared = Value::from(Object::new());
        let merged = merge(&[
            Value::array(vec![shared.clone(), Value::from(Object::new())]),
            Value::array(vec![shared]),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge(&[]).is_empty());
    }

    #[test]
    fn test_merge_objects_missing_is_undefined() {
        let mut calls = Vec::new();
        merge_objects(
            |args| {
                calls.push(args.to_vec());
                Value::Null
            },
            &[Object::new().with_field("a", 1), Object::new()],
        );
        assert_eq!(calls, vec![vec![Value::from(1), Value::Undefined]]);
    }

    #[test]
    fn test_merge_objects_no_inputs() {
        let merged = merge_objects(|_| Value::Null, &[]);
        assert!(merged.is_empty());
        assert!(merged.kind().is_plain());
    }
}
