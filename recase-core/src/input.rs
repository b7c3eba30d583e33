//! Loosely-typed converter input.
//!
//! Callers holding dynamic data (JSON documents, optional fields) hand it
//! over as an [`Input`]; the converter decides what is convertible.

use std::fmt;

/// A value handed to [`Case::convert`](crate::Case::convert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Null or undefined. Converts to an empty string.
    Missing,
    /// Text to convert.
    Text(&'a str),
    /// Anything else. Always rejected.
    Other(ValueKind),
}

/// The type of a non-text input, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Boolean,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the type name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Input::Missing, Input::Text)
    }
}

impl<'a> From<&'a serde_json::Value> for Input<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Input::Missing,
            Value::String(s) => Input::Text(s),
            Value::Number(_) => Input::Other(ValueKind::Number),
            Value::Bool(_) => Input::Other(ValueKind::Boolean),
            Value::Array(_) => Input::Other(ValueKind::Array),
            Value::Object(_) => Input::Other(ValueKind::Object),
        }
    }
}

macro_rules! impl_from_scalar {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(_: $ty) -> Self {
                    Input::Other($kind)
                }
            }
        )+
    };
}

impl_from_scalar!(ValueKind::Number => i32, i64, u32, u64, f32, f64);
impl_from_scalar!(ValueKind::Boolean => bool);
