use crate::domain::model::{BuildResult, Dataset, NavEvent, Section};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable location of the written files.
    fn location(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn site_name(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Sections to export, in output order.
    fn sections(&self) -> Vec<Section>;
    fn menu_open(&self) -> bool;
    fn scroll_offset(&self) -> f64;
    /// Interaction script replayed into `snapshot.html`; empty disables it.
    fn events(&self) -> &[NavEvent];
    fn write_manifest(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Dataset>;
    async fn transform(&self, dataset: Dataset) -> Result<BuildResult>;
    async fn load(&self, result: BuildResult) -> Result<String>;
}
