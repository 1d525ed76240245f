//! Application state for Folio.
//!
//! [`App`] owns the portfolio content, the page viewport, and the two state
//! machines from `folio-core`. It has no rendering dependency: the TUI lays
//! the page out, reports the geometry back through [`App::set_layout`], and
//! turns key presses into calls on this type.

mod page;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::debug;

use folio_config::FolioConfig;
use folio_core::{
    Metrics, NavigationController, ScrollRequest, ScrollSubscription, ScrollTracker, Viewport,
};

pub use folio_content::Portfolio;
pub use folio_types::ui::{AnimPhase, MenuSlide, SlideDirection, UiOptions};
pub use folio_types::{MenuState, ScrollState, Section};
pub use page::{PageGeometry, PageViewport, SectionSpan};

/// Rows taken by the fixed navigation bar drawn over the top of the page.
pub const NAV_BAR_HEIGHT: u16 = 3;
/// Rows taken by the scroll progress bar above the page.
pub const PROGRESS_BAR_HEIGHT: u16 = 1;

const MENU_SLIDE_DURATION: Duration = Duration::from_millis(150);

static NEXT_CONTENT_ID: AtomicU64 = AtomicU64::new(1);

pub struct App {
    portfolio: Portfolio,
    /// Identifies `portfolio` for render caches.
    content_id: u64,
    ui_options: UiOptions,
    menu_breakpoint: u16,
    page: PageViewport,
    tracker: ScrollTracker,
    /// Released when the app is dropped, detaching the tracker from the page.
    tracker_subscription: ScrollSubscription,
    nav: NavigationController,
    menu_cursor: Section,
    menu_slide: Option<MenuSlide>,
    /// Section the running smooth scroll is heading for.
    nav_target: Option<Section>,
    layout_width: Option<u16>,
    last_frame: Instant,
    quit_requested: bool,
}

impl App {
    /// Build from loaded settings. Pass `FolioConfig::default()` when no
    /// file exists so environment overrides still apply.
    #[must_use]
    pub fn new(portfolio: Portfolio, config: &FolioConfig) -> Self {
        Self::with_options(
            portfolio,
            config.ui_options(),
            config.smooth_scroll_duration(),
            config.menu_breakpoint(),
        )
    }

    #[must_use]
    pub fn with_options(
        portfolio: Portfolio,
        ui_options: UiOptions,
        smooth_scroll: Duration,
        menu_breakpoint: u16,
    ) -> Self {
        let metrics = Metrics::for_rows(NAV_BAR_HEIGHT);
        let smooth_scroll = if ui_options.reduced_motion {
            Duration::ZERO
        } else {
            smooth_scroll
        };
        let page = PageViewport::new(smooth_scroll);
        let tracker_subscription = page.listen();
        Self {
            portfolio,
            content_id: NEXT_CONTENT_ID.fetch_add(1, Ordering::Relaxed),
            ui_options,
            menu_breakpoint,
            page,
            tracker: ScrollTracker::new(metrics),
            tracker_subscription,
            nav: NavigationController::new(metrics),
            menu_cursor: Section::Home,
            menu_slide: None,
            nav_target: None,
            layout_width: None,
            last_frame: Instant::now(),
            quit_requested: false,
        }
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn content_id(&self) -> u64 {
        self.content_id
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn page(&self) -> &PageViewport {
        &self.page
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.page.offset()
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    /// Observe every published [`ScrollState`].
    #[must_use]
    pub fn subscribe_scroll(&self) -> watch::Receiver<ScrollState> {
        self.tracker.subscribe()
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.nav.menu()
    }

    #[must_use]
    pub fn menu_cursor(&self) -> Section {
        self.menu_cursor
    }

    #[must_use]
    pub fn menu_slide(&self) -> Option<&MenuSlide> {
        self.menu_slide.as_ref()
    }

    /// Whether the last layout was narrower than the menu breakpoint.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.layout_width
            .is_some_and(|width| width < self.menu_breakpoint)
    }

    #[must_use]
    pub fn is_compact_width(&self, width: u16) -> bool {
        width < self.menu_breakpoint
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Record the page layout measured by the renderer.
    pub fn set_layout(&mut self, width: u16, geometry: PageGeometry, viewport_height: usize) {
        if self.layout_width != Some(width) {
            debug!(width, rows = geometry.height, "Page layout rebuilt");
            self.layout_width = Some(width);
            if !self.is_compact() && self.nav.is_menu_open() {
                self.close_menu();
            }
        }
        self.page.set_layout(geometry, viewport_height);
        self.dispatch_scroll();
    }

    /// Advance animations by wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    pub fn advance(&mut self, delta: Duration) {
        self.page.advance(delta);
        if let Some(slide) = self.menu_slide.as_mut() {
            slide.advance(delta);
            if matches!(slide.phase(), AnimPhase::Completed) {
                self.menu_slide = None;
            }
        }
        self.dispatch_scroll();
    }

    /// Run the tracker if the page scrolled since it last looked.
    fn dispatch_scroll(&mut self) {
        if self.tracker_subscription.take_pending() {
            self.tracker.handle_scroll(&self.page);
        }
    }

    pub fn scroll_lines(&mut self, delta: isize) {
        self.page.scroll_by(delta);
        self.dispatch_scroll();
    }

    /// Scroll by one viewport, keeping two rows of context.
    pub fn scroll_pages(&mut self, pages: isize) {
        let step = self.page.height().saturating_sub(2).max(1);
        let step = isize::try_from(step).unwrap_or(isize::MAX);
        self.scroll_lines(step.saturating_mul(pages));
    }

    pub fn scroll_to_top(&mut self) {
        self.page.scroll_to(ScrollRequest::instant(0.0));
        self.dispatch_scroll();
    }

    pub fn scroll_to_bottom(&mut self) {
        let bottom = self.page.max_offset() as f64;
        self.page.scroll_to(ScrollRequest::instant(bottom));
        self.dispatch_scroll();
    }

    pub fn open_menu(&mut self) {
        if self.nav.is_menu_open() {
            return;
        }
        self.nav.open_menu();
        self.menu_cursor = self.scroll_state().active_section();
        self.menu_slide = (!self.ui_options.reduced_motion)
            .then(|| MenuSlide::opening(MENU_SLIDE_DURATION));
    }

    pub fn close_menu(&mut self) {
        let was_open = self.nav.is_menu_open();
        self.nav.close_menu();
        if was_open {
            self.menu_slide = (!self.ui_options.reduced_motion)
                .then(|| MenuSlide::closing(MENU_SLIDE_DURATION));
        }
    }

    pub fn move_menu_cursor(&mut self, forward: bool) {
        let next = if forward {
            self.menu_cursor.next()
        } else {
            self.menu_cursor.prev()
        };
        if let Some(section) = next {
            self.menu_cursor = section;
        }
    }

    /// Navigate to the section under the menu cursor.
    pub fn activate_menu_cursor(&mut self) {
        self.navigate_to(self.menu_cursor);
    }

    /// Close the menu and smooth-scroll to `section`.
    pub fn navigate_to(&mut self, section: Section) {
        let was_open = self.nav.is_menu_open();
        self.nav.navigate_to(section, &mut self.page);
        self.nav_target = Some(section);
        if was_open {
            self.menu_slide = (!self.ui_options.reduced_motion)
                .then(|| MenuSlide::closing(MENU_SLIDE_DURATION));
        }
        self.dispatch_scroll();
    }

    /// Navigate to the section after (or before) the current one. Stops at
    /// the ends. While a smooth scroll runs, its target is the current one.
    pub fn navigate_relative(&mut self, forward: bool) {
        let current = self
            .nav_target
            .filter(|_| self.page.is_animating())
            .unwrap_or_else(|| self.scroll_state().active_section());
        let target = if forward { current.next() } else { current.prev() };
        if let Some(section) = target {
            self.navigate_to(section);
        }
    }
}
