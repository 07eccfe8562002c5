use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete printable value recovered from an output call.
///
/// There is no "partial" value: resolution either yields one of these or
/// fails with a [`crate::ResolveError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Name of the variant, logged with each rendered line.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

/// Canonical printed form.
///
/// Floats use the shortest decimal that round-trips, so `3.140000` prints as
/// `3.14` and `2.000000` prints as `2`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Int(-7).to_string(), "-7");
    }

    #[test]
    fn test_float_display_drops_trailing_zeros() {
        assert_eq!(Value::Float(2.75).to_string(), "2.75");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_text_display_is_verbatim() {
        assert_eq!(Value::Text("Hello, World!".into()).to_string(), "Hello, World!");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Float(0.5).type_name(), "float");
        assert_eq!(Value::Text(String::new()).type_name(), "text");
    }

    #[test]
    fn test_value_json_shape() {
        let json = serde_json::to_string(&Value::Int(5)).unwrap();
        assert_eq!(json, r#"{"type":"int","value":5}"#);
    }
}
