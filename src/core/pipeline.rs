use crate::core::record::SchemaRecord;
use crate::core::registry::SchemaRegistry;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::json_kind;
use crate::utils::error::{RecordError, Result};
use serde_json::Value;
use std::path::Path;

/// Outcome of normalizing one input document.
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    pub schema_name: String,
    pub records: Vec<SchemaRecord>,
    pub extension_fields: usize,
    /// Whether the input was a single object rather than an array.
    pub single: bool,
}

/// Reads a JSON document, checks every object against one schema and writes
/// the normalized form next to the configured output path.
pub struct NormalizePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    registry: SchemaRegistry,
}

impl<S: Storage, C: ConfigProvider> NormalizePipeline<S, C> {
    pub fn new(storage: S, config: C, registry: SchemaRegistry) -> Self {
        Self {
            storage,
            config,
            registry,
        }
    }

    fn output_file_name(&self) -> String {
        let stem = Path::new(self.config.input_file())
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("records");
        format!("{}.normalized.json", stem)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NormalizePipeline<S, C> {
    type Batch = NormalizeResult;

    async fn extract(&self) -> Result<Value> {
        tracing::debug!("Reading input from: {}", self.config.input_file());
        let bytes = self.storage.read_file(self.config.input_file()).await?;
        let document: Value = serde_json::from_slice(&bytes)?;
        tracing::debug!("Input document is a JSON {}", json_kind(&document));
        Ok(document)
    }

    async fn transform(&self, document: Value) -> Result<NormalizeResult> {
        let schema = self.registry.get(self.config.schema_name())?;

        let (objects, single) = match document {
            Value::Array(items) => (items, false),
            object @ Value::Object(_) => (vec![object], true),
            other => {
                return Err(RecordError::MalformedJsonError {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        let mut records = Vec::with_capacity(objects.len());
        let mut extension_fields = 0;

        for (index, object) in objects.into_iter().enumerate() {
            let record = SchemaRecord::from_json(schema.clone(), object).map_err(|e| {
                RecordError::InvalidRecordError {
                    index,
                    source: Box::new(e),
                }
            })?;

            if !record.extensions().is_empty() {
                tracing::debug!(
                    "Record #{} carries {} extension field(s): {:?}",
                    index,
                    record.extensions().len(),
                    record.extensions().keys().collect::<Vec<_>>()
                );
            }
            if self.config.describe_records() {
                tracing::info!("{}", record.describe());
            }

            extension_fields += record.extensions().len();
            records.push(record);
        }

        tracing::info!(
            "Validated {} {} record(s), {} extension field(s) preserved",
            records.len(),
            schema.name,
            extension_fields
        );

        Ok(NormalizeResult {
            schema_name: schema.name.clone(),
            records,
            extension_fields,
            single,
        })
    }

    async fn load(&self, result: NormalizeResult) -> Result<String> {
        let file_name = self.output_file_name();
        let output_path = format!("{}/{}", self.config.output_path(), file_name);

        let body = match (result.single, result.records.as_slice()) {
            (true, [record]) => record.to_json_string(self.config.pretty())?,
            _ if self.config.pretty() => serde_json::to_string_pretty(&result.records)?,
            _ => serde_json::to_string(&result.records)?,
        };

        tracing::debug!(
            "Writing {} {} record(s) ({} bytes)",
            result.records.len(),
            result.schema_name,
            body.len()
        );
        self.storage.write_file(&file_name, body.as_bytes()).await?;

        Ok(output_path)
    }
}
