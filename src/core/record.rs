use crate::domain::model::{json_kind, FieldValue, Schema, SemanticType};
use crate::utils::error::{RecordError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

const UNSET_MARKER: &str = "<unset>";

/// One JSON object shaped by a [`Schema`].
///
/// Declared fields live in schema order and start unset. Every other key is
/// kept verbatim in the extension map so that documents written against a
/// newer or older schema survive a parse/serialize cycle unchanged.
///
/// Failed mutations leave the record untouched.
#[derive(Debug, Clone)]
pub struct SchemaRecord {
    schema: Arc<Schema>,
    known: Vec<Option<FieldValue>>,
    extensions: Map<String, Value>,
}

impl SchemaRecord {
    pub fn new(schema: Arc<Schema>) -> Self {
        let known = vec![None; schema.fields.len()];
        Self {
            schema,
            known,
            extensions: Map::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn shared_schema(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    fn slot(&self, field: &str) -> Result<usize> {
        self.schema
            .position(field)
            .ok_or_else(|| RecordError::UnknownFieldError {
                field: field.to_string(),
                schema: self.schema.name.clone(),
            })
    }

    pub fn get(&self, field: &str) -> Result<Option<&FieldValue>> {
        let slot = self.slot(field)?;
        Ok(self.known[slot].as_ref())
    }

    pub fn is_set(&self, field: &str) -> Result<bool> {
        Ok(self.get(field)?.is_some())
    }

    /// Stores a declared field. Returns the record so calls can be chained.
    ///
    /// Integers are widened into float fields, as in [`from_json`](Self::from_json).
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<&mut Self> {
        let slot = self.slot(field)?;
        let expected = self.schema.fields[slot].kind;
        let value = match (expected, value.into()) {
            (SemanticType::Float, FieldValue::Integer(i)) => FieldValue::Float(i as f64),
            (_, value) => value,
        };

        if value.semantic_type() != expected {
            return Err(RecordError::TypeMismatchError {
                field: field.to_string(),
                expected: expected.to_string(),
                found: value.semantic_type().to_string(),
            });
        }
        if matches!(value, FieldValue::Float(f) if !f.is_finite()) {
            return Err(RecordError::TypeMismatchError {
                field: field.to_string(),
                expected: expected.to_string(),
                found: "non-finite float".to_string(),
            });
        }

        self.known[slot] = Some(value);
        Ok(self)
    }

    /// Owned variant of [`set`](Self::set) for building a record in one expression.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn unset(&mut self, field: &str) -> Result<Option<FieldValue>> {
        let slot = self.slot(field)?;
        Ok(self.known[slot].take())
    }

    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    pub fn set_extension(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        let key = key.into();
        if self.schema.declares(&key) {
            return Err(RecordError::SchemaConflictError {
                key,
                schema: self.schema.name.clone(),
            });
        }
        self.extensions.insert(key, value.into());
        Ok(self)
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        self.set_extension(key, value)?;
        Ok(self)
    }

    pub fn remove_extension(&mut self, key: &str) -> Option<Value> {
        self.extensions.shift_remove(key)
    }

    /// Declared fields that are set, in schema order, followed by extensions
    /// in insertion order.
    fn entries(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        let declared = self
            .schema
            .fields
            .iter()
            .zip(&self.known)
            .filter_map(|(def, value)| {
                let json = value.as_ref()?.to_json()?;
                Some((def.name.as_str(), json))
            });
        let extra = self
            .extensions
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()));
        declared.chain(extra)
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        Value::Object(map)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Builds a record from a JSON object.
    ///
    /// Keys outside the schema never cause a failure. A `null` on a declared
    /// key leaves that field unset.
    pub fn from_json(schema: Arc<Schema>, document: Value) -> Result<Self> {
        let object = match document {
            Value::Object(object) => object,
            other => {
                return Err(RecordError::MalformedJsonError {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        let mut record = Self::new(schema);
        for (key, value) in object {
            match record.schema.position(&key) {
                Some(slot) => {
                    if value.is_null() {
                        continue;
                    }
                    let kind = record.schema.fields[slot].kind;
                    let parsed = FieldValue::from_json(kind, &value).ok_or_else(|| {
                        RecordError::TypeMismatchError {
                            field: key.clone(),
                            expected: kind.to_string(),
                            found: json_kind(&value).to_string(),
                        }
                    })?;
                    record.known[slot] = Some(parsed);
                }
                None => {
                    record.extensions.insert(key, value);
                }
            }
        }
        Ok(record)
    }

    pub fn from_json_str(schema: Arc<Schema>, text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_json(schema, document)
    }

    /// Debug rendering such as
    /// `SnpImportResults [report_name="r1", report_ref=<unset>, vcf_version="4.2", extensions={}]`.
    pub fn describe(&self) -> String {
        let fields: Vec<String> = self
            .schema
            .fields
            .iter()
            .zip(&self.known)
            .map(|(def, value)| {
                let rendered = value
                    .as_ref()
                    .and_then(FieldValue::to_json)
                    .map(|json| json.to_string())
                    .unwrap_or_else(|| UNSET_MARKER.to_string());
                format!("{}={}", def.name, rendered)
            })
            .collect();

        let extensions = Value::Object(self.extensions.clone());
        if fields.is_empty() {
            format!("{} [extensions={}]", self.schema.name, extensions)
        } else {
            format!(
                "{} [{}, extensions={}]",
                self.schema.name,
                fields.join(", "),
                extensions
            )
        }
    }
}

impl PartialEq for SchemaRecord {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.known == other.known
            && self.extensions == other.extensions
    }
}

impl Serialize for SchemaRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

impl fmt::Display for SchemaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
