use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Value kinds a declared field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    String,
    Integer,
    Float,
    Boolean,
    Object,
    Array,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Integer => "integer",
            SemanticType::Float => "float",
            SemanticType::Boolean => "boolean",
            SemanticType::Object => "object",
            SemanticType::Array => "array",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SemanticType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: SemanticType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered field table describing one record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Position of a declared field, which is also its serialization slot.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|def| def.name == field)
    }

    pub fn declares(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|def| def.name.as_str())
    }
}

/// A typed value stored in a declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

impl FieldValue {
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            FieldValue::String(_) => SemanticType::String,
            FieldValue::Integer(_) => SemanticType::Integer,
            FieldValue::Float(_) => SemanticType::Float,
            FieldValue::Boolean(_) => SemanticType::Boolean,
            FieldValue::Object(_) => SemanticType::Object,
            FieldValue::Array(_) => SemanticType::Array,
        }
    }

    /// Converts a JSON value into the declared kind, `None` when incompatible.
    ///
    /// Integers must fit `i64`; a float slot accepts any JSON number.
    pub fn from_json(kind: SemanticType, value: &Value) -> Option<Self> {
        match (kind, value) {
            (SemanticType::String, Value::String(s)) => Some(FieldValue::String(s.clone())),
            (SemanticType::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
            (SemanticType::Float, Value::Number(n)) => n.as_f64().map(FieldValue::Float),
            (SemanticType::Boolean, Value::Bool(b)) => Some(FieldValue::Boolean(*b)),
            (SemanticType::Object, Value::Object(map)) => Some(FieldValue::Object(map.clone())),
            (SemanticType::Array, Value::Array(items)) => Some(FieldValue::Array(items.clone())),
            _ => None,
        }
    }

    /// `None` only for non-finite floats, which JSON cannot carry.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            FieldValue::String(s) => Some(Value::String(s.clone())),
            FieldValue::Integer(i) => Some(Value::Number((*i).into())),
            FieldValue::Float(f) => Number::from_f64(*f).map(Value::Number),
            FieldValue::Boolean(b) => Some(Value::Bool(*b)),
            FieldValue::Object(map) => Some(Value::Object(map.clone())),
            FieldValue::Array(items) => Some(Value::Array(items.clone())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Map<String, Value>> for FieldValue {
    fn from(value: Map<String, Value>) -> Self {
        FieldValue::Object(value)
    }
}

impl From<Vec<Value>> for FieldValue {
    fn from(value: Vec<Value>) -> Self {
        FieldValue::Array(value)
    }
}

/// Human-readable name of a JSON value's kind, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_slot_rejects_fractional_and_oversized() {
        assert_eq!(
            FieldValue::from_json(SemanticType::Integer, &json!(1)),
            Some(FieldValue::Integer(1))
        );
        assert_eq!(FieldValue::from_json(SemanticType::Integer, &json!(1.5)), None);
        assert_eq!(
            FieldValue::from_json(SemanticType::Integer, &json!(u64::MAX)),
            None
        );
    }

    #[test]
    fn test_float_slot_accepts_integers() {
        assert_eq!(
            FieldValue::from_json(SemanticType::Float, &json!(4)),
            Some(FieldValue::Float(4.0))
        );
    }

    #[test]
    fn test_non_finite_float_has_no_json_form() {
        assert!(FieldValue::Float(f64::NAN).to_json().is_none());
        assert_eq!(FieldValue::Float(4.2).to_json(), Some(json!(4.2)));
    }

    #[test]
    fn test_schema_type_names_from_toml_style() {
        let def: FieldDef =
            serde_json::from_value(json!({"name": "will_perform_gwas", "type": "integer"})).unwrap();
        assert_eq!(def.kind, SemanticType::Integer);
    }
}
