pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::schema_file::SchemaFileConfig;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    engine::NormalizeEngine,
    pipeline::NormalizePipeline,
    record::SchemaRecord,
    registry::{SchemaRegistry, IMPORT_SNP_PARAMS, SERVICE_STATUS, SNP_IMPORT_RESULTS},
};
pub use domain::model::{FieldDef, FieldValue, Schema, SemanticType};
pub use utils::error::{RecordError, Result};
