//! Conversions between `Value` and `serde_json::Value`

use serde_json::{Map, Number};

use super::*;
use crate::error::{Result, SaplingError};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(fields.into_iter().collect()),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = SaplingError;

    fn try_from(value: &Value) -> Result<Self> {
        value.to_json()
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = SaplingError;

    fn try_from(value: Value) -> Result<Self> {
        value.to_json()
    }
}

impl Value {
    /// Convert to a `serde_json::Value`.
    ///
    /// - `Undefined` becomes `null` in arrays and at the top level, and is
    ///   dropped from objects.
    /// - Dates become their millisecond timestamp, patterns their source.
    ///   Any own fields of a date or pattern are discarded. Other categories
    ///   serialize their fields like a plain object.
    /// - Shared (non-cyclic) containers are written once per reference.
    ///
    /// # Errors
    ///
    /// Returns `CyclicValue` if a container contains itself.
    /// Returns `NonFiniteNumber` for `NaN` and infinities.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        JsonWriter::default().write(self)
    }

    /// Build a value from a `serde_json::Value`. Objects become plain objects.
    pub fn from_json(json: serde_json::Value) -> Self {
        Value::from(json)
    }
}

#[derive(Default)]
struct JsonWriter {
    stack: Vec<ContainerId>,
    path: Vec<String>,
}

impl JsonWriter {
    fn write(&mut self, value: &Value) -> Result<serde_json::Value> {
        match value {
            Value::Undefined | Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => number(*n).map(serde_json::Value::Number),
            Value::String(s) => Ok(serde_json::Value::String(s.to_string())),

            Value::Array(a) => {
                self.enter(a.id())?;
                let mut items = Vec::with_capacity(a.len());
                for (index, item) in a.to_vec().iter().enumerate() {
                    self.path.push(index.to_string());
                    items.push(self.write(item)?);
                    self.path.pop();
                }
                self.stack.pop();
                Ok(serde_json::Value::Array(items))
            }

            Value::Object(o) => match o.kind() {
                ObjectKind::Date(ms) => number(ms).map(serde_json::Value::Number),
                ObjectKind::Pattern(source) => Ok(serde_json::Value::String(source.to_string())),
                ObjectKind::Plain | ObjectKind::Bare | ObjectKind::Named(_) => {
                    self.enter(o.id())?;
                    let mut fields = Map::new();
                    for (key, field) in o.entries() {
                        if field.is_undefined() {
                            continue;
                        }
                        self.path.push(key.clone());
                        fields.insert(key, self.write(&field)?);
                        self.path.pop();
                    }
                    self.stack.pop();
                    Ok(serde_json::Value::Object(fields))
                }
            },
        }
    }

    fn enter(&mut self, id: ContainerId) -> Result<()> {
        if self.stack.contains(&id) {
            return Err(SaplingError::CyclicValue {
                path: self.path.join("."),
            });
        }
        self.stack.push(id);
        Ok(())
    }
}

fn number(n: f64) -> Result<Number> {
    let negative_zero = n == 0.0 && n.is_sign_negative();
    if !negative_zero && n.fract() == 0.0 && n.abs() < (1u64 << 53) as f64 {
        return Ok(Number::from(n as i64));
    }
    Number::from_f64(n).ok_or(SaplingError::NonFiniteNumber { value: n })
}
