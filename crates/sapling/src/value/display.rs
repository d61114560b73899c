//! Display and Debug implementations for Value
//!
//! Output is JavaScript-console flavoured. Containers that are already being
//! printed further up the stack render as `[Circular]`.

use std::fmt;

use super::*;

struct Printer {
    stack: Vec<ContainerId>,
}

impl Printer {
    fn new() -> Self {
        Self { stack: Vec::new() }
    }

    fn write(&mut self, f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
        match value {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),

            Value::Array(a) => {
                if self.stack.contains(&a.id()) {
                    return write!(f, "[Circular]");
                }
                self.stack.push(a.id());
                write!(f, "[")?;
                for (i, item) in a.to_vec().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    self.write(f, item)?;
                }
                self.stack.pop();
                write!(f, "]")
            }

            Value::Object(o) => {
                if self.stack.contains(&o.id()) {
                    return write!(f, "[Circular]");
                }
                match o.kind() {
                    ObjectKind::Plain => {}
                    ObjectKind::Bare => write!(f, "[Object: null prototype] ")?,
                    ObjectKind::Date(ms) => {
                        write!(f, "Date(")?;
                        write_number(f, ms)?;
                        write!(f, ")")?;
                        if o.is_empty() {
                            return Ok(());
                        }
                        write!(f, " ")?;
                    }
                    ObjectKind::Pattern(source) => {
                        write!(f, "/{}/", source)?;
                        if o.is_empty() {
                            return Ok(());
                        }
                        write!(f, " ")?;
                    }
                    ObjectKind::Named(name) => write!(f, "{} ", name)?,
                }

                self.stack.push(o.id());
                if o.is_empty() {
                    write!(f, "{{}}")?;
                } else {
                    write!(f, "{{ ")?;
                    for (i, (k, v)) in o.entries().iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}: ", k)?;
                        self.write(f, v)?;
                    }
                    write!(f, " }}")?;
                }
                self.stack.pop();
                Ok(())
            }
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else {
        // f64's Display already drops the fraction of integral values
        write!(f, "{}", n)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::new().write(f, self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::new().write(f, &Value::Array(self.clone()))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::new().write(f, &Value::Object(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_scalars() {
        assert_eq!(format!("{:?}", Value::Undefined), "undefined");
        assert_eq!(format!("{:?}", Value::Null), "null");
        assert_eq!(format!("{:?}", Value::from(5)), "5");
        assert_eq!(format!("{:?}", Value::from(1.5)), "1.5");
        assert_eq!(format!("{:?}", Value::from(f64::NAN)), "NaN");
        assert_eq!(format!("{:?}", Value::string("hi")), "\"hi\"");
    }

    #[test]
    fn test_display_string_unquoted() {
        assert_eq!(Value::string("hi").to_string(), "hi");
    }

    #[test]
    fn test_debug_containers() {
        let v = Value::from(
            Object::new()
                .with_field("a", 1)
                .with_field("b", vec![Value::from(true), Value::Null]),
        );
        assert_eq!(format!("{:?}", v), "{ a: 1, b: [true, null] }");
        assert_eq!(format!("{:?}", Value::from(Object::new())), "{}");
    }

    #[test]
    fn test_debug_kinds() {
        assert_eq!(
            format!("{:?}", Value::from(Object::bare())),
            "[Object: null prototype] {}"
        );
        assert_eq!(format!("{:?}", Value::from(Object::date(10.0))), "Date(10)");
        assert_eq!(format!("{:?}", Value::from(Object::pattern("a+"))), "/a+/");
        assert_eq!(
            format!("{:?}", Value::from(Object::named("Point").with_field("x", 1))),
            "Point { x: 1 }"
        );
    }

    #[test]
    fn test_debug_circular() {
        let a = Array::new();
        a.push(Value::from(1));
        a.push(Value::Array(a.clone()));
        assert_eq!(format!("{:?}", a), "[1, [Circular]]");
    }

    #[test]
    fn test_debug_shared_not_circular() {
        let shared = Value::from(vec![1]);
        let v = Value::array(vec![shared.clone(), shared]);
        assert_eq!(format!("{:?}", v), "[[1], [1]]");
    }
}
