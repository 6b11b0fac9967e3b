use crate::core::record::SchemaRecord;
use crate::domain::model::{FieldDef, Schema, SemanticType};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const IMPORT_SNP_PARAMS: &str = "ImportSnpParams";
pub const SNP_IMPORT_RESULTS: &str = "SnpImportResults";
pub const SERVICE_STATUS: &str = "Status";

/// Input of the SNP import method.
///
/// `will_perform_gwas` is an integer flag: unset, `0` or `1`.
pub fn import_snp_params() -> Schema {
    Schema::new(
        IMPORT_SNP_PARAMS,
        vec![
            FieldDef::new("workspace_name", SemanticType::String),
            FieldDef::new("staging_file_subdir_path", SemanticType::String),
            FieldDef::new("will_perform_gwas", SemanticType::Integer),
        ],
    )
}

/// Output of the SNP import method.
pub fn snp_import_results() -> Schema {
    Schema::new(
        SNP_IMPORT_RESULTS,
        vec![
            FieldDef::new("report_name", SemanticType::String),
            FieldDef::new("report_ref", SemanticType::String),
            FieldDef::new("vcf_version", SemanticType::String),
        ],
    )
}

/// Health report returned by the service's status method.
pub fn service_status() -> Schema {
    Schema::new(
        SERVICE_STATUS,
        vec![
            FieldDef::new("state", SemanticType::String),
            FieldDef::new("message", SemanticType::String),
            FieldDef::new("version", SemanticType::String),
            FieldDef::new("git_url", SemanticType::String),
            FieldDef::new("git_commit_hash", SemanticType::String),
        ],
    )
}

impl Validate for Schema {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("schema.name", &self.name)?;
        for def in &self.fields {
            validate_non_empty_string(&format!("{}.fields.name", self.name), &def.name)?;
        }
        validate_unique_names(&format!("{}.fields", self.name), self.field_names())
    }
}

/// Named schemas shared by every record created from them.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for schema in [import_snp_params(), snp_import_results(), service_status()] {
            registry
                .schemas
                .insert(schema.name.clone(), Arc::new(schema));
        }
        registry
    }

    pub fn register(&mut self, schema: Schema) -> Result<Arc<Schema>> {
        schema.validate()?;
        if self.schemas.contains_key(&schema.name) {
            return Err(RecordError::ConfigError {
                message: format!("Schema '{}' is already registered", schema.name),
            });
        }
        let shared = Arc::new(schema);
        self.schemas.insert(shared.name.clone(), Arc::clone(&shared));
        Ok(shared)
    }

    pub fn get(&self, name: &str) -> Result<Arc<Schema>> {
        self.schemas
            .get(name)
            .cloned()
            .ok_or_else(|| RecordError::UnknownSchemaError {
                name: name.to_string(),
            })
    }

    pub fn new_record(&self, name: &str) -> Result<SchemaRecord> {
        Ok(SchemaRecord::new(self.get(name)?))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
