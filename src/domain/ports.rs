use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn schema_name(&self) -> &str;
    fn pretty(&self) -> bool;
    fn describe_records(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Validated records handed from `transform` to `load`.
    type Batch: Send;

    async fn extract(&self) -> Result<serde_json::Value>;
    async fn transform(&self, document: serde_json::Value) -> Result<Self::Batch>;
    async fn load(&self, batch: Self::Batch) -> Result<String>;
}
