pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::StaticSitePipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::{dataset::portfolio, engine::SiteEngine, navigation::NavigationState};
pub use domain::model::{NavEvent, NavOrigin, NavbarStyle, Section};
pub use utils::error::{Result, SiteError};
