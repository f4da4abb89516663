//! Pure projection of navigation state and dataset into an HTML document.
//!
//! Nothing here touches IO. Every dataset string goes through
//! [`escape`] before it lands in the markup.

use crate::core::navigation::NavigationState;
use crate::domain::model::{Dataset, NavbarStyle, Project, Section};
use crate::utils::html::{animation_delay, escape};
use std::fmt::Write;

const BASE_CSS: &str = r#"
        @keyframes fadeInUp {
          from { opacity: 0; transform: translateY(30px); }
          to { opacity: 1; transform: translateY(0); }
        }
        @keyframes slideInLeft {
          from { opacity: 0; transform: translateX(-50px); }
          to { opacity: 1; transform: translateX(0); }
        }
        @keyframes float {
          0%, 100% { transform: translateY(0px); }
          50% { transform: translateY(-20px); }
        }
        .gradient-text {
          background: linear-gradient(to right, #60a5fa, #a78bfa, #ec4899);
          -webkit-background-clip: text;
          -webkit-text-fill-color: transparent;
          background-clip: text;
        }
"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

fn navbar_classes(style: NavbarStyle) -> &'static str {
    match style {
        NavbarStyle::Opaque => "bg-gray-900/95 backdrop-blur-md shadow-lg",
        NavbarStyle::Transparent => "bg-transparent",
    }
}

/// Renders the full page for `state`.
pub fn render_page(state: &NavigationState, data: &Dataset) -> String {
    let section = state.active_section();
    let title = format!("{} | {}", section.label(), data.profile.name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>{css}</style>
</head>
<body>
<div class="bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 min-h-screen text-white">
{nav}
{body}
{footer}
</div>
</body>
</html>
"#,
        title = escape(&title),
        css = BASE_CSS,
        nav = render_nav(state, data),
        body = render_section(section, data),
        footer = render_footer(data),
    )
}

pub fn render_nav(state: &NavigationState, data: &Dataset) -> String {
    let mut desktop = String::new();
    for section in Section::ALL {
        let active = if state.is_active(section) {
            " text-blue-400 font-semibold"
        } else {
            ""
        };
        let current = if state.is_active(section) {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = writeln!(
            desktop,
            r#"                <a href="{href}" data-nav="{id}" class="hover:text-blue-400 transition-colors{active}"{current}>{label}</a>"#,
            href = section.file_name(),
            id = section.id(),
            label = section.label(),
        );
    }

    let (toggle_glyph, toggle_label) = if state.menu_open() {
        ("&#x2715;", "Close menu")
    } else {
        ("&#x2630;", "Open menu")
    };

    let mobile = if state.menu_open() {
        let mut items = String::new();
        for section in Section::ALL {
            let _ = writeln!(
                items,
                r#"                <a href="{href}" data-nav="{id}" class="block w-full text-left hover:text-blue-400 transition-colors py-2">{label}</a>"#,
                href = section.file_name(),
                id = section.id(),
                label = section.label(),
            );
        }
        format!(
            r#"            <div class="md:hidden mt-4 space-y-3" data-mobile-menu>
{items}            </div>
"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<nav class="fixed top-0 w-full z-50 transition-all duration-300 {classes}" data-navbar="{style}">
        <div class="container mx-auto px-6 py-4">
            <div class="flex justify-between items-center">
            <h1 class="text-2xl font-bold gradient-text">{name}</h1>
            <div class="hidden md:flex space-x-8">
{desktop}            </div>
            <button class="md:hidden" data-action="toggle-menu" aria-expanded="{expanded}" aria-label="{toggle_label}">{toggle_glyph}</button>
            </div>
{mobile}        </div>
</nav>"#,
        classes = navbar_classes(state.navbar_style()),
        style = match state.navbar_style() {
            NavbarStyle::Opaque => "opaque",
            NavbarStyle::Transparent => "transparent",
        },
        name = escape(data.profile.name),
        expanded = state.menu_open(),
    )
}

pub fn render_section(section: Section, data: &Dataset) -> String {
    match section {
        Section::Home => render_home(data),
        Section::About => render_about(data),
        Section::Experience => render_experience(data),
        Section::Projects => render_projects(data),
        Section::Skills => render_skills(data),
        Section::Contact => render_contact(data),
    }
}

fn render_social_links(data: &Dataset, linkedin_class: &str, github_class: &str) -> String {
    format!(
        r#"<a href="{linkedin}" {EXTERNAL} class="{linkedin_class}" aria-label="LinkedIn">LinkedIn</a>
                <a href="{github}" {EXTERNAL} class="{github_class}" aria-label="GitHub">GitHub</a>"#,
        linkedin = escape(data.profile.linkedin_url),
        github = escape(data.profile.github_url),
    )
}

fn render_home(data: &Dataset) -> String {
    let profile = data.profile;
    format!(
        r#"<section id="home" class="min-h-screen flex items-center justify-center px-6 pt-20">
    <div class="text-center max-w-4xl" style="animation: fadeInUp 1s ease-out">
        <div class="mb-6 text-blue-400 text-7xl" style="animation: float 3s ease-in-out infinite" aria-hidden="true">&#x1F9E0;</div>
        <h1 class="text-5xl md:text-7xl font-bold mb-6 gradient-text">{headline}</h1>
        <p class="text-xl md:text-2xl text-gray-300 mb-8 leading-relaxed">{tagline}</p>
        <div class="flex flex-wrap justify-center gap-4 mb-8">
            <a href="{mailto}" class="flex items-center gap-2 bg-blue-600 hover:bg-blue-700 px-6 py-3 rounded-lg transition-all">Get in Touch</a>
            <a href="{projects}" data-action="view-projects" class="flex items-center gap-2 bg-gray-700 hover:bg-gray-600 px-6 py-3 rounded-lg transition-all">View Projects</a>
        </div>
        <div class="flex justify-center gap-6">
                {social}
        </div>
        <div class="mt-12 animate-bounce text-gray-400" aria-hidden="true">&#x2304;</div>
    </div>
</section>"#,
        headline = escape(profile.headline),
        tagline = escape(profile.tagline),
        mailto = escape(&profile.mailto()),
        projects = Section::Projects.file_name(),
        social = render_social_links(
            data,
            "hover:text-blue-400 transition-colors",
            "hover:text-blue-400 transition-colors",
        ),
    )
}

fn render_about(data: &Dataset) -> String {
    let mut education = String::new();
    for entry in data.education {
        let _ = write!(
            education,
            r#"
                    <div>
                        <p class="font-semibold text-white">{degree}</p>
                        <p class="text-gray-400">{institution}</p>
                        <p class="text-sm text-gray-500">{period}</p>
                    </div>"#,
            degree = escape(entry.degree),
            institution = escape(entry.institution),
            period = escape(entry.period),
        );
    }

    let mut certifications = String::new();
    for name in data.certifications {
        let _ = write!(
            certifications,
            "\n                    <li>&bull; {}</li>",
            escape(name)
        );
    }

    format!(
        r#"<section id="about" class="min-h-screen py-24 px-6">
    <div class="container mx-auto max-w-4xl" style="animation: fadeInUp 0.8s ease-out">
        <h2 class="text-4xl md:text-5xl font-bold mb-12 gradient-text">About Me</h2>
        <div class="bg-gray-800 rounded-2xl p-8 shadow-2xl border border-gray-700">
            <p class="text-lg text-gray-300 mb-6 leading-relaxed">{bio}</p>
            <div class="grid md:grid-cols-2 gap-6 mt-8">
                <div class="bg-gradient-to-br from-blue-900/30 to-purple-900/30 p-6 rounded-xl border border-blue-500/30">
                    <h3 class="text-xl font-bold mb-4 text-blue-300">Education</h3>
                    <div class="space-y-4">{education}
                    </div>
                </div>
                <div class="bg-gradient-to-br from-green-900/30 to-teal-900/30 p-6 rounded-xl border border-green-500/30">
                    <h3 class="text-xl font-bold mb-4 text-green-300">Certifications</h3>
                    <ul class="space-y-2 text-gray-300">{certifications}
                    </ul>
                </div>
            </div>
        </div>
    </div>
</section>"#,
        bio = escape(data.profile.bio),
    )
}

fn render_experience(data: &Dataset) -> String {
    let mut cards = String::new();
    for (index, entry) in data.experience.iter().enumerate() {
        let mut achievements = String::new();
        for achievement in entry.achievements {
            let _ = write!(
                achievements,
                r#"
                <li class="flex items-start gap-3 text-gray-300"><span class="text-blue-400 mt-1">&#x25B9;</span><span>{}</span></li>"#,
                escape(achievement)
            );
        }
        let _ = write!(
            cards,
            r#"
        <div class="bg-gray-800 rounded-2xl p-8 shadow-2xl border border-gray-700" style="animation: fadeInUp 0.6s ease-out {delay} both">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                <div>
                    <h3 class="text-2xl font-bold text-white mb-1">{role}</h3>
                    <p class="text-blue-400 font-semibold">{company}</p>
                </div>
                <span class="text-gray-400 mt-2 md:mt-0">{period}</span>
            </div>
            <ul class="space-y-3 mt-6">{achievements}
            </ul>
        </div>"#,
            delay = animation_delay(index, 0.2),
            role = escape(entry.role),
            company = escape(entry.company),
            period = escape(entry.period),
        );
    }

    format!(
        r#"<section id="experience" class="min-h-screen py-24 px-6">
    <div class="container mx-auto max-w-5xl">
        <h2 class="text-4xl md:text-5xl font-bold mb-12 gradient-text" style="animation: fadeInUp 0.8s ease-out">Experience</h2>
        <div class="space-y-8">{cards}
        </div>
    </div>
</section>"#
    )
}

/// One project card. `index` is the position across both project groups
/// and only drives the entry animation delay.
pub fn render_project_card(project: &Project, index: usize) -> String {
    let mut chips = String::new();
    for tech in project.technologies {
        let _ = write!(
            chips,
            r#"<span class="bg-gray-700 text-gray-200 px-3 py-1 rounded-full text-xs font-medium">{}</span>"#,
            escape(tech)
        );
    }

    let impact = match project.impact {
        Some(impact) => format!(
            r#"
            <div class="bg-green-900/30 border border-green-500/30 rounded-lg p-3 mt-4">
                <p class="text-green-300 text-sm font-medium"><span class="text-green-400">Impact:</span> {}</p>
            </div>"#,
            escape(impact)
        ),
        None => String::new(),
    };

    format!(
        r#"
        <article class="bg-gradient-to-br from-gray-800 to-gray-900 rounded-xl p-6 shadow-xl hover:shadow-2xl transition-all duration-300 hover:-translate-y-2 border border-gray-700" style="animation: fadeInUp 0.6s ease-out {delay} both">
            <div class="flex items-start justify-between mb-3">
                <div class="bg-gradient-to-r from-blue-500 to-purple-500 text-white text-xs px-3 py-1 rounded-full font-semibold">{category}</div>
            </div>
            <h3 class="text-xl font-bold text-white mb-3">{title}</h3>
            <p class="text-gray-300 mb-4 leading-relaxed">{description}</p>
            <div class="flex flex-wrap gap-2 mb-4">{chips}</div>{impact}
        </article>"#,
        delay = animation_delay(index, 0.1),
        category = escape(project.category),
        title = escape(project.title),
        description = escape(project.description),
    )
}

fn render_projects(data: &Dataset) -> String {
    let flagship: String = data
        .flagship_projects
        .iter()
        .enumerate()
        .map(|(i, p)| render_project_card(p, i))
        .collect();
    let offset = data.flagship_projects.len();
    let open_source: String = data
        .open_source_projects
        .iter()
        .enumerate()
        .map(|(i, p)| render_project_card(p, i + offset))
        .collect();

    format!(
        r#"<section id="projects" class="min-h-screen py-24 px-6">
    <div class="container mx-auto max-w-7xl">
        <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text" style="animation: fadeInUp 0.8s ease-out">Featured Projects</h2>
        <p class="text-gray-400 mb-12 text-lg">Production-ready AI solutions with measurable impact</p>
        <div class="mb-16" data-group="flagship">
            <h3 class="text-3xl font-bold text-white mb-8 flex items-center gap-3">Flagship Projects</h3>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{flagship}
            </div>
        </div>
        <div data-group="open-source">
            <h3 class="text-3xl font-bold text-white mb-8 flex items-center gap-3">Open Source &amp; Personal Projects</h3>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{open_source}
            </div>
        </div>
    </div>
</section>"#
    )
}

fn render_skills(data: &Dataset) -> String {
    let mut cards = String::new();
    for (index, category) in data.skills.iter().enumerate() {
        let chips: String = category
            .skills
            .iter()
            .map(|skill| {
                format!(
                    r#"<span class="bg-gray-700 text-gray-200 px-3 py-1 rounded-full text-sm">{}</span>"#,
                    escape(skill)
                )
            })
            .collect();
        let _ = write!(
            cards,
            r#"
        <div class="bg-gradient-to-br from-gray-800 to-gray-900 rounded-2xl p-6 shadow-xl border border-gray-700" style="animation: fadeInUp 0.6s ease-out {delay} both">
            <h3 class="text-xl font-bold mb-4 text-blue-400">{name}</h3>
            <div class="flex flex-wrap gap-2">{chips}</div>
        </div>"#,
            delay = animation_delay(index, 0.1),
            name = escape(category.name),
        );
    }

    format!(
        r#"<section id="skills" class="min-h-screen py-24 px-6">
    <div class="container mx-auto max-w-6xl">
        <h2 class="text-4xl md:text-5xl font-bold mb-12 gradient-text" style="animation: fadeInUp 0.8s ease-out">Technical Skills</h2>
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}
        </div>
    </div>
</section>"#
    )
}

fn render_contact(data: &Dataset) -> String {
    let profile = data.profile;
    format!(
        r#"<section id="contact" class="min-h-screen flex items-center justify-center px-6">
    <div class="text-center max-w-2xl" style="animation: fadeInUp 0.8s ease-out">
        <h2 class="text-4xl md:text-5xl font-bold mb-8 gradient-text">Get In Touch</h2>
        <p class="text-xl text-gray-300 mb-12">{availability}</p>
        <div class="space-y-4">
            <a href="{mailto}" class="flex items-center justify-center gap-3 bg-gray-800 hover:bg-gray-700 px-6 py-4 rounded-xl transition-all"><span>{email}</span></a>
            <a href="{tel}" class="flex items-center justify-center gap-3 bg-gray-800 hover:bg-gray-700 px-6 py-4 rounded-xl transition-all"><span>{phone}</span></a>
            <div class="flex items-center justify-center gap-3 bg-gray-800 px-6 py-4 rounded-xl"><span>{location}</span></div>
        </div>
        <div class="flex justify-center gap-6 mt-8">
                {social}
        </div>
    </div>
</section>"#,
        availability = escape(profile.availability),
        mailto = escape(&profile.mailto()),
        email = escape(profile.email),
        tel = escape(profile.phone_uri),
        phone = escape(profile.phone_display),
        location = escape(profile.location),
        social = render_social_links(
            data,
            "bg-blue-600 hover:bg-blue-700 p-4 rounded-full transition-all",
            "bg-gray-700 hover:bg-gray-600 p-4 rounded-full transition-all",
        ),
    )
}

fn render_footer(data: &Dataset) -> String {
    format!(
        r#"<footer class="bg-gray-900 py-8 text-center text-gray-400 border-t border-gray-800">
    <p>{}</p>
</footer>"#,
        escape(data.profile.footer)
    )
}
