//! Cycle-aware structural equality

use std::collections::HashSet;

use super::{ContainerId, Value};

/// Compare two values structurally.
///
/// Pairs of containers already under comparison are assumed equal, so a
/// cycle in one value has to be matched by a cycle of the same shape in the
/// other rather than recursing forever.
pub(crate) fn deep_eq(a: &Value, b: &Value) -> bool {
    Comparer::default().eq(a, b)
}

#[derive(Default)]
struct Comparer {
    in_progress: HashSet<(ContainerId, ContainerId)>,
}

impl Comparer {
    fn eq(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::String(x), Value::String(y)) => x == y,

            (Value::Array(x), Value::Array(y)) => {
                if x.ptr_eq(y) || !self.in_progress.insert((x.id(), y.id())) {
                    return true;
                }
                let (xs, ys) = (x.to_vec(), y.to_vec());
                xs.len() == ys.len() && xs.iter().zip(&ys).all(|(a, b)| self.eq(a, b))
            }

            (Value::Object(x), Value::Object(y)) => {
                if x.ptr_eq(y) || !self.in_progress.insert((x.id(), y.id())) {
                    return true;
                }
                if x.kind() != y.kind() || x.len() != y.len() {
                    return false;
                }
                x.entries()
                    .iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| self.eq(value, &other)))
            }

            _ => false,
        }
    }
}
