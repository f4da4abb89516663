use crate::config::{validate_export, DEFAULT_SITE_NAME};
use crate::core::{ConfigProvider, NavEvent, Section};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_negative, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: Option<SiteConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    pub view: Option<ViewConfig>,
    #[serde(default)]
    pub events: Vec<NavEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub sections: Option<Vec<Section>>,
    pub manifest: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub menu_open: Option<bool>,
    pub scroll_offset: Option<f64>,
}

impl TomlConfig {
    /// Reads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Replaces `[output] path`, e.g. from a command-line flag.
    pub fn override_output(&mut self, path: String) {
        self.output.path = Some(path);
    }

    pub fn validate_config(&self) -> Result<()> {
        let path = validate_required_field("output.path", &self.output.path)?;
        validate_export(path, &self.sections(), self.scroll_offset())?;
        for (i, event) in self.events.iter().enumerate() {
            if let NavEvent::Scroll { offset } = event {
                validate_non_negative(&format!("events[{}].offset", i), *offset)?;
            }
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn site_name(&self) -> &str {
        self.site
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(DEFAULT_SITE_NAME)
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or_default()
    }

    fn sections(&self) -> Vec<Section> {
        self.output
            .sections
            .clone()
            .filter(|sections| !sections.is_empty())
            .unwrap_or_else(|| Section::ALL.to_vec())
    }

    fn menu_open(&self) -> bool {
        self.view.as_ref().and_then(|v| v.menu_open).unwrap_or(false)
    }

    fn scroll_offset(&self) -> f64 {
        self.view.as_ref().and_then(|v| v.scroll_offset).unwrap_or(0.0)
    }

    fn events(&self) -> &[NavEvent] {
        &self.events
    }

    fn write_manifest(&self) -> bool {
        self.output.manifest.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
