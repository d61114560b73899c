//! Path accessor configuration

use crate::ops::path::{delete_path, get_path, set_path, Path};
use crate::Value;

/// Configuration for dot-path access.
///
/// The free functions [`get_by_path`](crate::get_by_path),
/// [`set_by_path`](crate::set_by_path) and
/// [`delete_by_path`](crate::delete_by_path) use [`AccessContext::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessContext {
    /// Character separating path segments. There is no escape for it.
    pub separator: char,

    /// Whether `set` creates empty objects for missing intermediate levels
    pub create_missing: bool,
}

impl Default for AccessContext {
    fn default() -> Self {
        Self {
            separator: '.',
            create_missing: true,
        }
    }
}

impl AccessContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context splitting paths on a custom separator.
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            ..Default::default()
        }
    }

    /// Disable auto-vivification of missing intermediate levels.
    pub fn without_create_missing(self) -> Self {
        Self {
            create_missing: false,
            ..self
        }
    }

    /// Parse `path` with this context's separator.
    pub fn parse(&self, path: &str) -> Path {
        Path::parse_with(path, self.separator)
    }

    /// Read the value at `path`. See [`get_by_path`](crate::get_by_path).
    pub fn get(&self, data: &Value, path: &str) -> Value {
        get_path(data, &self.parse(path))
    }

    /// Write `value` at `path`. See [`set_by_path`](crate::set_by_path).
    pub fn set(&self, data: &Value, path: &str, value: Value) -> bool {
        set_path(data, &self.parse(path), value, self.create_missing)
    }

    /// Remove the entry at `path`. See [`delete_by_path`](crate::delete_by_path).
    pub fn delete(&self, data: &Value, path: &str) -> bool {
        delete_path(data, &self.parse(path))
    }
}
