//! Shallow array copy

use crate::Array;

/// Copy an array one level deep.
///
/// The result is a new array with the same items in the same order. Nested
/// containers are shared with the original, not copied.
pub fn copy(array: &Array) -> Array {
    Array::from_vec(array.to_vec())
}
