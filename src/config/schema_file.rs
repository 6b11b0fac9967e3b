use crate::core::registry::SchemaRegistry;
use crate::domain::model::Schema;
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_unique_names, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schemas declared in a TOML file:
///
/// ```toml
/// [[schemas]]
/// name = "CustomParams"
/// fields = [
///     { name = "workspace_name", type = "string" },
///     { name = "threshold", type = "float" },
/// ]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFileConfig {
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

impl SchemaFileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RecordError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Builds a registry holding the built-in schemas plus the declared ones.
    pub fn into_registry(self) -> Result<SchemaRegistry> {
        self.validate()?;
        let mut registry = SchemaRegistry::with_builtins();
        for schema in self.schemas {
            tracing::debug!(
                "Registering schema {} with {} field(s)",
                schema.name,
                schema.fields.len()
            );
            registry.register(schema)?;
        }
        Ok(registry)
    }
}

impl Validate for SchemaFileConfig {
    fn validate(&self) -> Result<()> {
        validate_unique_names("schemas.name", self.schemas.iter().map(|s| s.name.as_str()))?;
        for schema in &self.schemas {
            schema.validate()?;
        }
        Ok(())
    }
}
