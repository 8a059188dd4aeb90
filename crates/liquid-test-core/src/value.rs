//! Runtime scalar values carried by assertion results.
//!
//! The remote runner reports `got`/`expected` as loosely-typed JSON scalars.
//! Messages must show both the value and its *runtime* kind, so the engine
//! keeps a small closed variant instead of stringifying at the wire boundary.

use std::fmt;

/// A decoded scalar from an assertion result.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// A string value.
    Str(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// An explicit null, or an absent field.
    Null,
    /// Anything non-scalar (arrays, objects), kept as its serialized text.
    Other(String),
}

impl ScalarValue {
    /// The kind tag rendered as `(<type>)` in diagnostic messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Other(_) => "other",
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => {
                // Integral values render without a trailing ".0", the way the
                // runner itself prints them.
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(ScalarValue::from("x").kind(), "string");
        assert_eq!(ScalarValue::from(1.5).kind(), "number");
        assert_eq!(ScalarValue::from(true).kind(), "boolean");
        assert_eq!(ScalarValue::Null.kind(), "null");
        assert_eq!(ScalarValue::Other("[1,2]".into()).kind(), "other");
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(ScalarValue::from(90_i64).to_string(), "90");
        assert_eq!(ScalarValue::from(100.0).to_string(), "100");
        assert_eq!(ScalarValue::from(0.5).to_string(), "0.5");
        assert_eq!(ScalarValue::from(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_string_renders_bare() {
        assert_eq!(ScalarValue::from("foo").to_string(), "foo");
    }
}
