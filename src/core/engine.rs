use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct NormalizeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NormalizeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting normalization...");

        tracing::debug!("Reading input document...");
        let document = self.pipeline.extract().await?;

        tracing::debug!("Validating records...");
        let batch = self.pipeline.transform(document).await?;

        tracing::debug!("Writing output...");
        let output_path = self.pipeline.load(batch).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
