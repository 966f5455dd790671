//! Coerced parameter values and their runtime kinds.
//!
//! [`ParamValue`] is the shape a parameter has once the upstream coercion
//! step is done with it. [`ValueKind`] is the exact runtime type tag used by
//! the range guard, and [`ParamType`] is the type a parameter was declared
//! with.
//!
//! ```rust
//! use paramguard_validator::value::{ParamValue, ValueKind};
//!
//! let v = ParamValue::from(vec![3_i64, 4]);
//! assert_eq!(v.kind(), ValueKind::Array);
//! assert_eq!(v.representative_kind(), ValueKind::Integer);
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE KIND
// ============================================================================

/// Exact runtime type of a [`ParamValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Date,
    DateTime,
    Array,
    Object,
}

impl ValueKind {
    /// Returns a descriptive lowercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// DECLARED TYPE
// ============================================================================

/// The type a parameter is declared with, e.g. `integer` or `array_of: float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// A collection whose elements have the given kind.
    ArrayOf(ValueKind),
    /// A single value of the given kind.
    #[serde(untagged)]
    Scalar(ValueKind),
}

impl ParamType {
    /// Kind that individual values (or collection elements) must have.
    #[must_use]
    pub const fn element_kind(&self) -> ValueKind {
        match self {
            Self::Scalar(kind) | Self::ArrayOf(kind) => *kind,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::ArrayOf(kind) => write!(f, "array[{kind}]"),
        }
    }
}

// ============================================================================
// PARAM VALUE
// ============================================================================

/// A parameter value after type coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ParamValue {
    /// Explicit null.
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    /// Ordered collection of values.
    Array(Vec<ParamValue>),
    /// Parameters of one scope, keyed by name.
    Object(IndexMap<String, ParamValue>),
}

impl ParamValue {
    /// Returns the exact runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Kind used by the range guard: the first element's kind for arrays
    /// (`Null` when empty), the value's own kind otherwise.
    #[must_use]
    pub fn representative_kind(&self) -> ValueKind {
        match self {
            Self::Array(items) => items.first().map_or(ValueKind::Null, Self::kind),
            other => other.kind(),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the entries if this value is a scope mapping.
    #[must_use]
    pub const fn as_object(&self) -> Option<&IndexMap<String, ParamValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Views the value as a sequence: arrays as themselves, anything else as
    /// a single-element slice.
    #[must_use]
    pub fn as_elements(&self) -> &[ParamValue] {
        match self {
            Self::Array(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Natural ordering between two orderable values.
    ///
    /// Integers and floats compare numerically with each other. Any other
    /// pair of different kinds is unordered, as are booleans, nulls,
    /// collections and NaN floats.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Builds a scope mapping from `(name, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ParamValue)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for ParamValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// JSON numbers become `Integer` when they fit an `i64`, `Float` otherwise.
/// Strings are kept as strings; temporal coercion belongs upstream.
impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
