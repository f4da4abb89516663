use crate::core::dataset::{portfolio, validate_dataset};
use crate::core::navigation::NavigationState;
use crate::core::render::render_page;
use crate::core::{BuildResult, ConfigProvider, Dataset, NavOrigin, Pipeline, Section, Storage};
use crate::domain::model::{BuildManifest, RenderedPage};
use crate::utils::error::Result;

pub const SNAPSHOT_FILE: &str = "snapshot.html";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Renders one HTML snapshot per requested section and writes them
/// through `storage`.
pub struct StaticSitePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> StaticSitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// State for the exported page of `section`: fresh state, section
    /// selected, then the configured menu and scroll view applied.
    pub fn state_for(&self, section: Section) -> NavigationState {
        let mut state = NavigationState::new();
        state.select_section(section, NavOrigin::Desktop);
        if self.config.menu_open() {
            state.toggle_menu();
        }
        state.observe_scroll(self.config.scroll_offset());
        state
    }

    fn page(file_name: String, state: &NavigationState, dataset: &Dataset) -> RenderedPage {
        RenderedPage {
            file_name,
            section: state.active_section(),
            menu_open: state.menu_open(),
            navbar: state.navbar_style(),
            html: render_page(state, dataset),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for StaticSitePipeline<S, C> {
    async fn extract(&self) -> Result<Dataset> {
        let dataset = portfolio();
        validate_dataset(&dataset)?;
        tracing::debug!("Dataset validated");
        Ok(dataset)
    }

    async fn transform(&self, dataset: Dataset) -> Result<BuildResult> {
        let mut pages = Vec::new();

        for section in self.config.sections() {
            let state = self.state_for(section);
            tracing::debug!(
                "Rendering {} (menu_open={}, navbar={:?})",
                section,
                state.menu_open(),
                state.navbar_style()
            );
            pages.push(Self::page(section.file_name(), &state, &dataset));
        }

        let events = self.config.events();
        if !events.is_empty() {
            let state = NavigationState::replay(events);
            tracing::info!(
                "Replayed {} events, ending on {}",
                events.len(),
                state.active_section()
            );
            pages.push(Self::page(SNAPSHOT_FILE.to_string(), &state, &dataset));
        }

        let manifest = if self.config.write_manifest() {
            Some(BuildManifest {
                generated_at: chrono::Utc::now(),
                site: self.config.site_name().to_string(),
                pages: pages.clone(),
            })
        } else {
            None
        };

        Ok(BuildResult { pages, manifest })
    }

    async fn load(&self, result: BuildResult) -> Result<String> {
        for page in &result.pages {
            self.storage
                .write_file(&page.file_name, page.html.as_bytes())
                .await?;
            tracing::debug!("Wrote {} ({} bytes)", page.file_name, page.html.len());
        }

        if let Some(manifest) = &result.manifest {
            let json = serde_json::to_vec_pretty(manifest)?;
            self.storage.write_file(MANIFEST_FILE, &json).await?;
            tracing::debug!("Wrote {}", MANIFEST_FILE);
        }

        Ok(self.storage.location())
    }
}
