use clap::Parser;
use snp_records::utils::error::ErrorSeverity;
use snp_records::utils::{logger, validation::Validate};
use snp_records::{
    CliConfig, LocalStorage, NormalizeEngine, NormalizePipeline, SchemaFileConfig, SchemaRegistry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting snp-records");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let registry = match &config.schema_file {
        Some(path) => {
            tracing::info!("Loading schemas from: {}", path);
            match SchemaFileConfig::from_file(path).and_then(SchemaFileConfig::into_registry) {
                Ok(registry) => registry,
                Err(e) => {
                    eprintln!("❌ Failed to load schema file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => SchemaRegistry::with_builtins(),
    };
    tracing::debug!(
        "Known schemas: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = NormalizePipeline::new(storage, config, registry);
    let engine = NormalizeEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Records normalized successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Normalization failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
