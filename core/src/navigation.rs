//! Overlay menu visibility and jump-to-section navigation.

use tracing::{debug, trace};

use folio_types::{MenuState, Section};

use crate::{Metrics, ScrollRequest, Viewport};

/// Owns [`MenuState`] and converts section selections into scroll requests.
///
/// ```text
/// Closed --open_menu--> Open
/// Open --close_menu | navigate_to--> Closed
/// ```
#[derive(Debug, Clone)]
pub struct NavigationController {
    menu: MenuState,
    nav_offset: f64,
}

impl NavigationController {
    #[must_use]
    pub fn new(metrics: Metrics) -> Self {
        Self {
            menu: MenuState::Closed,
            nav_offset: metrics.nav_offset,
        }
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn open_menu(&mut self) {
        if !self.menu.is_open() {
            trace!("Menu opened");
        }
        self.menu = MenuState::Open;
    }

    pub fn close_menu(&mut self) {
        if self.menu.is_open() {
            trace!("Menu closed");
        }
        self.menu = MenuState::Closed;
    }

    /// Close the menu, then smooth-scroll so `section` sits just below the nav bar.
    ///
    /// Returns `false` when the section is not in the rendered document; the
    /// menu is still closed in that case and nothing scrolls.
    pub fn navigate_to<V: Viewport + ?Sized>(&mut self, section: Section, viewport: &mut V) -> bool {
        self.close_menu();

        let Some(top) = viewport.section_offset_top(section) else {
            debug!(%section, "Navigation target not rendered; ignoring");
            return false;
        };

        let target = top - self.nav_offset;
        debug!(%section, target, "Navigating");
        viewport.scroll_to(ScrollRequest::smooth(target));
        true
    }
}

#[cfg(test)]
mod tests {
    use folio_types::{MenuState, Section};

    use super::NavigationController;
    use crate::test_support::FakePage;
    use crate::{Metrics, ScrollBehavior, ScrollTracker};

    fn page() -> FakePage {
        FakePage::stacked([800.0, 600.0, 600.0, 600.0, 600.0, 600.0], 800.0)
    }

    #[test]
    fn menu_starts_closed_and_opens() {
        let mut nav = NavigationController::new(Metrics::default());
        assert_eq!(nav.menu(), MenuState::Closed);
        nav.open_menu();
        assert!(nav.is_menu_open());
        nav.open_menu();
        assert!(nav.is_menu_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavigationController::new(Metrics::default());
        nav.open_menu();
        nav.close_menu();
        let once = nav.menu();
        nav.close_menu();
        assert_eq!(once, MenuState::Closed);
        assert_eq!(nav.menu(), MenuState::Closed);
    }

    #[test]
    fn navigate_always_leaves_menu_closed() {
        for start_open in [false, true] {
            let mut nav = NavigationController::new(Metrics::default());
            if start_open {
                nav.open_menu();
            }
            let mut page = page();
            assert!(nav.navigate_to(Section::Projects, &mut page));
            assert!(!nav.is_menu_open());
        }
    }

    #[test]
    fn navigate_requests_smooth_scroll_below_nav_bar() {
        let mut nav = NavigationController::new(Metrics::default());
        let mut page = page();
        nav.navigate_to(Section::Skills, &mut page);

        let request = page.requests.last().copied().expect("scroll requested");
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert!((request.top - (1400.0 - 80.0)).abs() < 1e-9);
    }

    #[test]
    fn navigate_to_missing_section_is_a_silent_noop() {
        let mut nav = NavigationController::new(Metrics::default());
        nav.open_menu();
        let mut page = page();
        page.offset = 250.0;
        page.sections.retain(|(s, _, _)| *s != Section::Contact);

        assert!(!nav.navigate_to(Section::Contact, &mut page));
        assert!(page.requests.is_empty());
        assert!((page.offset - 250.0).abs() < 1e-9);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn navigated_section_becomes_active() {
        let metrics = Metrics::default();
        let mut nav = NavigationController::new(metrics);
        let mut tracker = ScrollTracker::new(metrics);
        let mut page = page();

        for section in [Section::About, Section::Projects, Section::Home] {
            nav.navigate_to(section, &mut page);
            assert_eq!(tracker.handle_scroll(&page).active_section(), section);
        }
    }
}
