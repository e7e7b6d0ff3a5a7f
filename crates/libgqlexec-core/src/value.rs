use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use std::any::Any;
use std::sync::Arc;

/// A fully-resolved runtime value.
///
/// Every value flowing through execution (coerced arguments and variables,
/// resolver outputs, completed response data) is a [`Value`]. Host values
/// that are opaque to the engine travel as [`Value::Any`] and are treated as
/// object-shaped: only resolvers know how to look inside of them.
#[derive(Clone, Debug, Default)]
pub enum Value {
    Any(AnyValue),
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    #[default]
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn any<T: Any + Send + Sync>(value: T) -> Self {
        Self::Any(AnyValue::new(value))
    }

    pub fn as_any(&self) -> Option<&AnyValue> {
        if let Self::Any(any) = self { Some(any) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self { Some(*b) } else { None }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(i) = self { Some(*i) } else { None }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Self::List(items) = self { Some(items) } else { None }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(fields) = self { Some(fields) } else { None }
    }

    /// The string payload of a [`Value::String`] or a [`Value::Enum`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Enum(s) | Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Looks up an entry of an object-valued [`Value`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short description of this value's variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Any(_) => "host value",
            Self::Boolean(_) => "Boolean",
            Self::Enum(_) => "enum value",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Object(_) => "object",
            Self::String(_) => "String",
        }
    }
}
impl std::cmp::PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Any(a), Self::Any(b)) => a.ptr_eq(b),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any(_) => write!(f, "<host value>"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Enum(name) => write!(f, "{name}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (idx, (name, val)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {val}")?;
                }
                write!(f, "}}")
            },
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

// Host values have no wire representation and serialize as `null`.
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Any(_) | Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Enum(s) | Self::String(s) => serializer.serialize_str(s),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            },
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, val) in fields {
                    map.serialize_entry(key, val)?;
                }
                map.end()
            },
        }
    }
}

impl std::convert::From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(num.as_f64().unwrap_or(f64::NAN))
                }
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) =>
                Self::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(fields) => Self::Object(
                fields.into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect(),
            ),
        }
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
impl std::convert::From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self::Object(value)
    }
}

/// A host value carried opaquely through execution.
///
/// Resolvers may return any `Send + Sync` value wrapped in an [`AnyValue`];
/// child resolvers receive it back as their parent value and recover it with
/// [`AnyValue::downcast_ref`].
#[derive(Clone)]
pub struct AnyValue(Arc<dyn Any + Send + Sync>);
impl AnyValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    pub fn ptr_eq(&self, other: &AnyValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl std::fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AnyValue(..)")
    }
}
