//! Dot-path access into nested values
//!
//! A path like `"user.tags.0"` is split on `.` into segments. Object levels
//! are indexed by key, array levels by numeric segment. There is no escape
//! syntax: a key that itself contains a `.` cannot be addressed.
//!
//! ```
//! use sapling::{delete_by_path, get_by_path, set_by_path, Object, Value};
//!
//! let data = Value::from(Object::new());
//!
//! assert!(set_by_path(&data, "user.name", Value::from("Ada")));
//! assert_eq!(get_by_path(&data, "user.name"), Value::from("Ada"));
//!
//! assert!(delete_by_path(&data, "user.name"));
//! assert!(!delete_by_path(&data, "user.name"));
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::context::AccessContext;
use crate::{Object, Value};

/// One segment of a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    inner: String,
}

impl Segment {
    /// Create a segment from its text
    pub fn new(s: impl Into<String>) -> Self {
        Segment { inner: s.into() }
    }

    /// The segment as an object key
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The segment as an array index.
    ///
    /// Only canonical non-negative integers qualify: `"0"` and `"12"` do,
    /// `"01"`, `"-1"` and `"+1"` do not.
    pub fn as_index(&self) -> Option<usize> {
        let s = self.inner.as_str();
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if canonical {
            s.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A parsed dot-path.
///
/// Parsing never fails and always yields at least one segment; the empty
/// string is a single empty key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Split `path` on `.`
    pub fn parse(path: &str) -> Self {
        Self::parse_with(path, '.')
    }

    /// Split `path` on a custom separator
    pub fn parse_with(path: &str, separator: char) -> Self {
        Path {
            segments: path.split(separator).map(Segment::new).collect(),
        }
    }

    /// The segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment and the ones leading to it
    pub fn split_last(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_last()
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().map(Segment::new).collect(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Accessors
// ═══════════════════════════════════════════════════════════════════

/// Read the value at `path`.
///
/// Walking stops early at a `Null` or `Undefined` level and returns it.
/// A missing key, an out-of-range or non-numeric array index, or indexing
/// into any other scalar yields `Undefined`.
pub fn get_by_path(data: &Value, path: &str) -> Value {
    AccessContext::default().get(data, path)
}

/// Write `value` at `path`, creating empty objects for missing intermediate
/// levels.
///
/// Returns `false` without writing when a level on the way is not a
/// container, or when a non-numeric segment addresses an array. Writing past
/// the end of an array pads it with `Undefined`, up to
/// [`Array::MAX_GAP`](crate::Array::MAX_GAP) items; an index further out
/// returns `false`. Levels created before the failure point stay in place.
pub fn set_by_path(data: &Value, path: &str, value: Value) -> bool {
    AccessContext::default().set(data, path, value)
}

/// Remove the entry at `path`.
///
/// Returns `false` when an intermediate level is missing or when the last
/// level does not own the key. Removing from an array shifts the later
/// items down.
pub fn delete_by_path(data: &Value, path: &str) -> bool {
    AccessContext::default().delete(data, path)
}

pub(crate) fn get_path(data: &Value, path: &Path) -> Value {
    let mut current = data.clone();
    for segment in path.segments() {
        if current.is_nullish() {
            return current;
        }
        current = child(&current, segment).unwrap_or_default();
    }
    current
}

pub(crate) fn set_path(data: &Value, path: &Path, value: Value, create_missing: bool) -> bool {
    let Some((last, parents)) = path.split_last() else {
        return false;
    };

    let mut current = data.clone();
    for segment in parents {
        if !current.is_container() {
            debug!(%path, %segment, "cannot descend into a non-container");
            return false;
        }
        let next = child(&current, segment).unwrap_or_default();
        current = if next.is_nullish() {
            if !create_missing {
                return false;
            }
            let created = Value::Object(Object::new());
            if !assign(&current, segment, created.clone()) {
                return false;
            }
            created
        } else {
            next
        };
    }

    if !current.is_container() {
        debug!(%path, "cannot assign into a non-container");
        return false;
    }
    assign(&current, last, value)
}

pub(crate) fn delete_path(data: &Value, path: &Path) -> bool {
    let Some((last, parents)) = path.split_last() else {
        return false;
    };

    let mut current = data.clone();
    for segment in parents {
        let next = child(&current, segment).unwrap_or_default();
        if next.is_nullish() {
            return false;
        }
        current = next;
    }

    match &current {
        Value::Object(object) => object.remove(last.as_str()).is_some(),
        Value::Array(array) => last
            .as_index()
            .is_some_and(|index| array.remove(index).is_some()),
        _ => false,
    }
}

fn child(value: &Value, segment: &Segment) -> Option<Value> {
    match value {
        Value::Object(object) => object.get(segment.as_str()),
        Value::Array(array) => array.get(segment.as_index()?),
        _ => None,
    }
}

fn assign(container: &Value, segment: &Segment, value: Value) -> bool {
    match container {
        Value::Object(object) => {
            object.insert(segment.as_str(), value);
            true
        }
        Value::Array(array) => match segment.as_index() {
            Some(index) => {
                let stored = array.set(index, value);
                if !stored {
                    debug!(%segment, len = array.len(), "array index too far past the end");
                }
                stored
            }
            None => {
                debug!(%segment, "array levels need a numeric segment");
                false
            }
        },
        _ => false,
    }
}
