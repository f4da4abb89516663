use crate::domain::model::{NavEvent, NavOrigin, NavbarStyle, Section};

/// Offset at which the navbar switches to its opaque, blurred treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Page-scoped UI state: which section is shown, whether the mobile menu
/// is expanded, and the last observed vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    active_section: Section,
    menu_open: bool,
    scroll_offset: f64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            menu_open: false,
            scroll_offset: 0.0,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    /// Shows `section`. Picking an entry from the mobile menu also collapses it.
    pub fn select_section(&mut self, section: Section, origin: NavOrigin) {
        tracing::trace!(%section, ?origin, "select section");
        self.active_section = section;
        if origin == NavOrigin::Mobile {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::trace!(menu_open = self.menu_open, "toggle menu");
    }

    /// Records the viewport offset. Overscroll can report negative or
    /// non-finite values; those are stored as 0.
    pub fn observe_scroll(&mut self, offset: f64) {
        self.scroll_offset = if offset.is_finite() && offset > 0.0 {
            offset
        } else {
            0.0
        };
    }

    pub fn navbar_style(&self) -> NavbarStyle {
        navbar_style(self.scroll_offset)
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Select { section, origin } => self.select_section(section, origin),
            NavEvent::ToggleMenu => self.toggle_menu(),
            NavEvent::Scroll { offset } => self.observe_scroll(offset),
        }
    }

    pub fn replay<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a NavEvent>,
    {
        let mut state = Self::new();
        for event in events {
            state.apply(*event);
        }
        state
    }
}

pub fn navbar_style(offset: f64) -> NavbarStyle {
    if offset >= SCROLL_THRESHOLD {
        NavbarStyle::Opaque
    } else {
        NavbarStyle::Transparent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.active_section(), Section::Home);
        assert!(!state.menu_open());
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.navbar_style(), NavbarStyle::Transparent);
    }

    #[test]
    fn test_select_every_section() {
        for section in Section::ALL {
            let mut state = NavigationState::new();
            state.select_section(section, NavOrigin::Desktop);
            assert_eq!(state.active_section(), section);
            let active: Vec<_> = Section::ALL
                .into_iter()
                .filter(|s| state.is_active(*s))
                .collect();
            assert_eq!(active, vec![section]);
        }
    }

    #[test]
    fn test_mobile_selection_closes_menu() {
        let mut state = NavigationState::new();
        state.toggle_menu();
        assert!(state.menu_open());

        state.select_section(Section::Skills, NavOrigin::Mobile);
        assert_eq!(state.active_section(), Section::Skills);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_desktop_and_hero_selection_keep_menu() {
        let mut state = NavigationState::new();
        state.toggle_menu();

        state.select_section(Section::About, NavOrigin::Desktop);
        assert!(state.menu_open());

        state.select_section(Section::Projects, NavOrigin::Hero);
        assert!(state.menu_open());
        assert_eq!(state.active_section(), Section::Projects);
    }

    #[test]
    fn test_even_toggles_restore_menu() {
        for start_open in [false, true] {
            let mut state = NavigationState::new();
            if start_open {
                state.toggle_menu();
            }
            for n in [0, 2, 4, 10] {
                let mut toggled = state;
                for _ in 0..n {
                    toggled.toggle_menu();
                }
                assert_eq!(toggled.menu_open(), start_open);
            }
        }
    }

    #[test]
    fn test_navbar_threshold() {
        assert_eq!(navbar_style(0.0), NavbarStyle::Transparent);
        assert_eq!(navbar_style(49.99), NavbarStyle::Transparent);
        assert_eq!(navbar_style(50.0), NavbarStyle::Opaque);
        assert_eq!(navbar_style(1200.0), NavbarStyle::Opaque);
    }

    #[test]
    fn test_navbar_style_ignores_history() {
        let mut down = NavigationState::new();
        down.observe_scroll(10.0);
        down.observe_scroll(300.0);
        down.observe_scroll(30.0);

        let mut direct = NavigationState::new();
        direct.observe_scroll(30.0);

        assert_eq!(down.navbar_style(), direct.navbar_style());
        assert_eq!(down.navbar_style(), NavbarStyle::Transparent);
    }

    #[test]
    fn test_negative_and_nan_offsets_clamp_to_zero() {
        let mut state = NavigationState::new();
        state.observe_scroll(-35.0);
        assert_eq!(state.scroll_offset(), 0.0);
        state.observe_scroll(f64::NAN);
        assert_eq!(state.scroll_offset(), 0.0);
        state.observe_scroll(f64::INFINITY);
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn test_replay_events() {
        let events = [
            NavEvent::ToggleMenu,
            NavEvent::Scroll { offset: 120.0 },
            NavEvent::Select {
                section: Section::Contact,
                origin: NavOrigin::Mobile,
            },
        ];
        let state = NavigationState::replay(&events);
        assert_eq!(state.active_section(), Section::Contact);
        assert!(!state.menu_open());
        assert_eq!(state.navbar_style(), NavbarStyle::Opaque);
    }
}
