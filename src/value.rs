// used for calendar timestamps carried as values
use chrono::NaiveDateTime;

// mapping values keep their insertion order
use indexmap::IndexMap;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A callable carried as a value. The resolver never invokes it; it only
/// needs to recognize one when matching the Function kind.
pub type Callable = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A platform object the resolver treats as opaque: a UI element, a wrapped
/// library handle, anything the core cannot inspect structurally. The tag
/// is what narrowing checks compare against.
pub trait ForeignValue: fmt::Debug + Send + Sync {
    fn tag(&self) -> &str;
    fn as_any(&self) -> &dyn Any;
}

// ------------- Value -------------
/// A runtime value offered to the resolver, either positionally or inside
/// a trailing named-argument bag.
///
/// Int and Float overlap intentionally: an integral `Float` satisfies the
/// Int kind and every `Int` satisfies the Float kind.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(IndexMap<String, Value>),
    Date(NaiveDateTime),
    Buffer(Vec<u8>),
    Function(Callable),
    Foreign(Arc<dyn ForeignValue>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn function<F>(f: F) -> Value
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Buffer(bytes.into())
    }

    pub fn foreign(object: impl ForeignValue + 'static) -> Value {
        Value::Foreign(Arc::new(object))
    }

    /// The runtime type tag used in failure messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "object",
            Value::Date(_) => "date",
            Value::Buffer(_) => "buffer",
            Value::Function(_) => "function",
            Value::Foreign(_) => "foreign",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            // callables and platform objects compare by identity
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::Foreign(a), Value::Foreign(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(i) => write!(f, "Int({i})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Date(d) => write!(f, "Date({d})"),
            Value::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            Value::Function(_) => write!(f, "Function(..)"),
            Value::Foreign(object) => write!(f, "Foreign({})", object.tag()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Map(_) => write!(f, "[object]"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Buffer(bytes) => write!(f, "[buffer of {} bytes]", bytes.len()),
            Value::Function(_) => write!(f, "[function]"),
            Value::Foreign(object) => write!(f, "[{}]", object.tag()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}
impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}
impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}
impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Value {
        Value::Map(entries)
    }
}
impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Value {
        Value::Date(d)
    }
}
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
