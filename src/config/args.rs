use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "snp-records")]
#[command(about = "Validate and normalize SNP import records against their schema")]
pub struct CliConfig {
    #[arg(long, help = "JSON file holding one record or an array of records")]
    pub input: String,

    #[arg(long, default_value = "ImportSnpParams")]
    pub schema: String,

    #[arg(long, help = "TOML file declaring additional schemas")]
    pub schema_file: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Pretty-print the normalized JSON")]
    pub pretty: bool,

    #[arg(long, help = "Log a description of every record")]
    pub describe: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn schema_name(&self) -> &str {
        &self.schema
    }

    fn pretty(&self) -> bool {
        self.pretty
    }

    fn describe_records(&self) -> bool {
        self.describe
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["json"])?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("schema", &self.schema)?;
        if let Some(schema_file) = &self.schema_file {
            validate_file_extension("schema_file", schema_file, &["toml"])?;
        }
        Ok(())
    }
}
