use portfolio_site::core::render::render_page;
use portfolio_site::utils::html::escape;
use portfolio_site::{portfolio, NavOrigin, NavbarStyle, NavigationState, Section};

fn render(state: &NavigationState) -> String {
    render_page(state, &portfolio())
}

fn selected(section: Section) -> NavigationState {
    let mut state = NavigationState::new();
    state.select_section(section, NavOrigin::Desktop);
    state
}

#[test]
fn test_selecting_each_label_shows_only_that_section() {
    for section in Section::ALL {
        let html = render(&selected(section));
        for other in Section::ALL {
            let marker = format!(r#"<section id="{}""#, other.id());
            assert_eq!(
                html.contains(&marker),
                other == section,
                "selected {}, checked {}",
                section,
                other
            );
        }
    }
}

#[test]
fn test_initial_state_renders_home_with_menu_closed() {
    let html = render(&NavigationState::new());
    assert!(html.contains(r#"<section id="home""#));
    assert_eq!(html.matches("<section ").count(), 1);
    assert!(!html.contains("data-mobile-menu"));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn test_active_label_is_highlighted() {
    let html = render(&selected(Section::Skills));
    assert!(html.contains(
        r#"data-nav="skills" class="hover:text-blue-400 transition-colors text-blue-400 font-semibold" aria-current="page">Skills</a>"#
    ));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
}

#[test]
fn test_every_project_rendered_once_in_order() {
    let data = portfolio();
    let html = render(&selected(Section::Projects));

    let mut last = 0;
    for project in data
        .flagship_projects
        .iter()
        .chain(data.open_source_projects.iter())
    {
        let title = format!(">{}</h3>", escape(project.title));
        assert_eq!(html.matches(&title).count(), 1, "{}", project.title);
        let pos = html.find(&title).unwrap();
        assert!(pos > last, "{} is out of order", project.title);
        last = pos;
    }

    let flagship_group = html.find(r#"data-group="flagship""#).unwrap();
    let open_source_group = html.find(r#"data-group="open-source""#).unwrap();
    let first_open_source = html
        .find(&escape(data.open_source_projects[0].title))
        .unwrap();
    assert!(flagship_group < open_source_group);
    assert!(open_source_group < first_open_source);
}

#[test]
fn test_impact_shown_for_flagship_projects_only() {
    let html = render(&selected(Section::Projects));
    assert_eq!(
        html.matches(">Impact:</span>").count(),
        portfolio().flagship_projects.len()
    );
}

#[test]
fn test_navbar_style_follows_scroll_threshold() {
    for (offset, expected) in [
        (0.0, NavbarStyle::Transparent),
        (49.0, NavbarStyle::Transparent),
        (50.0, NavbarStyle::Opaque),
        (900.0, NavbarStyle::Opaque),
    ] {
        let mut state = NavigationState::new();
        state.observe_scroll(offset);
        let html = render(&state);
        assert_eq!(state.navbar_style(), expected);
        match expected {
            NavbarStyle::Opaque => {
                assert!(html.contains("bg-gray-900/95 backdrop-blur-md shadow-lg"));
                assert!(html.contains(r#"data-navbar="opaque""#));
            }
            NavbarStyle::Transparent => {
                assert!(html.contains("duration-300 bg-transparent"));
                assert!(html.contains(r#"data-navbar="transparent""#));
            }
        }
    }
}

#[test]
fn test_scrolling_back_up_restores_transparent_navbar() {
    let mut state = NavigationState::new();
    state.observe_scroll(400.0);
    assert_eq!(state.navbar_style(), NavbarStyle::Opaque);
    state.observe_scroll(20.0);
    assert_eq!(state.navbar_style(), NavbarStyle::Transparent);
}

#[test]
fn test_contact_shows_email_and_phone_once() {
    let html = render(&selected(Section::Contact));
    assert_eq!(html.matches(">basheerahmedshk@gmail.com</span>").count(), 1);
    assert_eq!(html.matches("+91 8340676856").count(), 1);
    assert_eq!(html.matches(r#"href="mailto:basheerahmedshk@gmail.com""#).count(), 1);
    assert_eq!(html.matches(r#"href="tel:+918340676856""#).count(), 1);
}

#[test]
fn test_contact_details_absent_elsewhere() {
    for section in Section::ALL {
        if section == Section::Contact {
            continue;
        }
        let html = render(&selected(section));
        assert!(!html.contains(">basheerahmedshk@gmail.com</span>"));
        assert!(!html.contains("+91 8340676856"));
    }
}

#[test]
fn test_mobile_menu_round_trip() {
    let mut state = NavigationState::new();
    state.toggle_menu();
    let open = render(&state);
    assert!(open.contains("data-mobile-menu"));

    state.select_section(Section::About, NavOrigin::Mobile);
    let after = render(&state);
    assert!(!after.contains("data-mobile-menu"));
    assert!(after.contains(r#"<section id="about""#));
}

#[test]
fn test_skills_render_every_category_in_order() {
    let data = portfolio();
    let html = render(&selected(Section::Skills));
    let mut last = 0;
    for category in data.skills {
        let heading = format!(">{}</h3>", escape(category.name));
        let pos = html.find(&heading).unwrap();
        assert!(pos > last);
        last = pos;
        for skill in category.skills {
            assert!(html.contains(&format!(">{}</span>", escape(skill))));
        }
    }
}

#[test]
fn test_experience_renders_all_achievements() {
    let data = portfolio();
    let html = render(&selected(Section::Experience));
    for entry in data.experience {
        assert!(html.contains(&escape(entry.company)));
        for achievement in entry.achievements {
            assert_eq!(html.matches(&escape(achievement)).count(), 1);
        }
    }
    assert!(html.contains("fadeInUp 0.6s ease-out 0.2s both"));
}
