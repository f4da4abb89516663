use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting site build");

        tracing::debug!("Loading dataset");
        let dataset = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} projects, {} skill categories, {} experience entries",
            dataset.flagship_projects.len() + dataset.open_source_projects.len(),
            dataset.skills.len(),
            dataset.experience.len()
        );

        tracing::debug!("Rendering pages");
        let result = self.pipeline.transform(dataset).await?;
        tracing::info!("Rendered {} pages", result.pages.len());

        tracing::debug!("Writing pages");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!(
            "Site written to {} in {:?}",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
