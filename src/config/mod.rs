pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, NavEvent, Section};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_path, validate_unique, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_SITE_NAME: &str = "portfolio";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render the portfolio as static HTML snapshots, one per section")]
pub struct CliConfig {
    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    /// Sections to export (default: all six)
    #[arg(long, value_delimiter = ',')]
    pub sections: Vec<Section>,

    /// Render every page with the mobile menu expanded
    #[arg(long)]
    pub menu_open: bool,

    /// Vertical scroll offset to render the navbar at
    #[arg(long, default_value = "0")]
    pub scroll_offset: f64,

    /// Skip manifest.json
    #[arg(long)]
    pub no_manifest: bool,

    /// Print the built-in dataset as JSON and exit
    #[arg(long)]
    pub dump_data: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Shared checks for the export settings of any config source.
pub(crate) fn validate_export(output_path: &str, sections: &[Section], scroll_offset: f64) -> Result<()> {
    validate_path("output_path", output_path)?;
    validate_unique("sections", sections.iter().copied())?;
    validate_non_negative("scroll_offset", scroll_offset)?;
    Ok(())
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_export(&self.output_path, &self.sections, self.scroll_offset)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn site_name(&self) -> &str {
        DEFAULT_SITE_NAME
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sections(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            Section::ALL.to_vec()
        } else {
            self.sections.clone()
        }
    }

    fn menu_open(&self) -> bool {
        self.menu_open
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn events(&self) -> &[NavEvent] {
        &[]
    }

    fn write_manifest(&self) -> bool {
        !self.no_manifest
    }
}
