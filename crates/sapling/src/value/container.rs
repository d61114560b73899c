//! Container types: arrays and objects
//!
//! Both are shared, interior-mutable handles. Two handles compare as the same
//! instance when they point at the same allocation, which is what
//! [`ContainerId`] captures.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use super::Value;

/// Instance identity of a container.
///
/// Equal ids mean the same underlying container, regardless of contents.
/// Only meaningful while the container is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

impl ContainerId {
    fn of<T>(rc: &Rc<T>) -> Self {
        ContainerId(Rc::as_ptr(rc) as *const () as usize)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Array
// ═══════════════════════════════════════════════════════════════════

/// A shared, growable sequence of values.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Wrap an existing vector
    pub fn from_vec(items: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(items)))
    }

    /// Instance identity
    pub fn id(&self) -> ContainerId {
        ContainerId::of(&self.0)
    }

    /// Check whether both handles point at the same array
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the array has no items
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Get the item at `index` (a handle clone)
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Largest number of `Undefined` items [`Array::set`] pads with
    pub const MAX_GAP: usize = 1024;

    /// Store `value` at `index`, padding with `Undefined` when `index` is past
    /// the end.
    ///
    /// Returns `false` without writing when `index` lies more than
    /// [`Array::MAX_GAP`] items past the end.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut items = self.0.borrow_mut();
        let within_gap = items
            .len()
            .checked_add(Self::MAX_GAP)
            .is_some_and(|limit| index <= limit);
        if !within_gap {
            return false;
        }
        if index >= items.len() {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value;
        true
    }

    /// Append an item
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Remove and return the item at `index`, shifting later items down
    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut items = self.0.borrow_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    /// Snapshot of the items (handle clones)
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array::from_vec(items)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array::from_vec(iter.into_iter().collect())
    }
}

// ═══════════════════════════════════════════════════════════════════
// Object
// ═══════════════════════════════════════════════════════════════════

/// The category of an object.
///
/// This is a closed set. Categories outside it are carried as
/// [`ObjectKind::Named`] and lose their category when duplicated.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// An ordinary mapping
    Plain,

    /// A mapping without any category (a null-prototype object)
    Bare,

    /// A point in time, in milliseconds since the Unix epoch
    Date(f64),

    /// A pattern, stored as its source text
    Pattern(Rc<str>),

    /// Any other caller-defined category
    Named(Rc<str>),
}

impl ObjectKind {
    /// Category name, as used in debug output
    pub fn name(&self) -> &str {
        match self {
            ObjectKind::Plain => "Object",
            ObjectKind::Bare => "null",
            ObjectKind::Date(_) => "Date",
            ObjectKind::Pattern(_) => "RegExp",
            ObjectKind::Named(name) => &**name,
        }
    }

    /// Check if this is the plain category
    pub fn is_plain(&self) -> bool {
        matches!(self, ObjectKind::Plain)
    }
}

struct ObjectData {
    kind: ObjectKind,
    fields: IndexMap<String, Value>,
}

/// A shared mapping from text keys to values.
///
/// Fields keep insertion order.
#[derive(Clone)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl Object {
    /// Create an empty plain object
    pub fn new() -> Self {
        Self::with_kind(ObjectKind::Plain)
    }

    /// Create an empty object of the given category
    pub fn with_kind(kind: ObjectKind) -> Self {
        Object(Rc::new(RefCell::new(ObjectData {
            kind,
            fields: IndexMap::new(),
        })))
    }

    /// Create an empty object with no category
    pub fn bare() -> Self {
        Self::with_kind(ObjectKind::Bare)
    }

    /// Create a date object
    pub fn date(millis: f64) -> Self {
        Self::with_kind(ObjectKind::Date(millis))
    }

    /// Create a pattern object
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::with_kind(ObjectKind::Pattern(Rc::from(source.into())))
    }

    /// Create an object of a caller-defined category
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_kind(ObjectKind::Named(Rc::from(name.into())))
    }

    /// Add a field (builder pattern)
    pub fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// The object's category
    pub fn kind(&self) -> ObjectKind {
        self.0.borrow().kind.clone()
    }

    /// Instance identity
    pub fn id(&self) -> ContainerId {
        ContainerId::of(&self.0)
    }

    /// Check whether both handles point at the same object
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of own fields
    pub fn len(&self) -> usize {
        self.0.borrow().fields.len()
    }

    /// Check if the object has no fields
    pub fn is_empty(&self) -> bool {
        self.0.borrow().fields.is_empty()
    }

    /// Check if `key` is an own field
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().fields.contains_key(key)
    }

    /// Get a field (a handle clone)
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().fields.get(key).cloned()
    }

    /// Set a field, returning the previous value
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.borrow_mut().fields.insert(key.into(), value)
    }

    /// Remove a field, keeping the order of the remaining ones
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().fields.shift_remove(key)
    }

    /// Snapshot of the own keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().fields.keys().cloned().collect()
    }

    /// Snapshot of the own fields in insertion order
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let object = Object::new();
        for (key, value) in iter {
            object.insert(key, value.into());
        }
        object
    }
}
