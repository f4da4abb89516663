use crate::utils::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six content panels. Declaration order is navigation order.
/// Serialized as the lower-case id; deserialized case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Lower-cased label, used for element ids and file names.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn file_name(self) -> String {
        match self {
            Section::Home => "index.html".to_string(),
            other => format!("{}.html", other.id()),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SiteError::UnknownSection {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Section {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where a section selection came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavOrigin {
    #[default]
    Desktop,
    Mobile,
    /// The "View Projects" button on the home section.
    Hero,
}

/// A user interaction the navigation state reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEvent {
    Select {
        section: Section,
        #[serde(default)]
        origin: NavOrigin,
    },
    ToggleMenu,
    Scroll {
        offset: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub impact: Option<&'static str>,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub availability: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    /// `tel:` target, digits only.
    pub phone_uri: &'static str,
    pub location: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub footer: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the renderer projects. All tables are compiled in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dataset {
    pub profile: &'static Profile,
    pub flagship_projects: &'static [Project],
    pub open_source_projects: &'static [Project],
    pub skills: &'static [SkillCategory],
    pub experience: &'static [ExperienceEntry],
    pub education: &'static [Education],
    pub certifications: &'static [&'static str],
}

/// Navbar background treatment, driven by the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarStyle {
    Transparent,
    Opaque,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub file_name: String,
    pub section: Section,
    pub menu_open: bool,
    pub navbar: NavbarStyle,
    #[serde(skip)]
    pub html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildManifest {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub site: String,
    pub pages: Vec<RenderedPage>,
}

#[derive(Debug, Clone)]
pub struct BuildResult {
    pub pages: Vec<RenderedPage>,
    pub manifest: Option<BuildManifest>,
}
