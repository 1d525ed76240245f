//! Scroll-driven navigation state for Folio.
//!
//! Two small state machines live here, both free of any rendering dependency:
//!
//! - [`ScrollTracker`] turns raw viewport geometry into a [`ScrollState`]
//!   (progress ratio + active section) and publishes it to subscribers.
//! - [`NavigationController`] owns the overlay menu's [`MenuState`] and turns
//!   a section selection into a smooth scroll request.
//!
//! The host (terminal renderer, test harness) supplies geometry through the
//! [`Viewport`] trait and receives scroll requests back through it.
//!
//! ```text
//! host scroll ──> ScrollEvents ──> ScrollSubscription ──> ScrollTracker ──watch──> nav / progress bar
//! user intent ──> NavigationController ──ScrollRequest──> Viewport::scroll_to ──> SmoothScroll
//! ```

mod events;
mod navigation;
mod smooth_scroll;
#[cfg(test)]
mod test_support;
mod tracker;
mod viewport;

pub use events::{ScrollEvents, ScrollSubscription};
pub use navigation::NavigationController;
pub use smooth_scroll::SmoothScroll;
pub use tracker::{ScrollTracker, find_active_section, progress_ratio};
pub use viewport::{ScrollBehavior, ScrollRequest, Viewport};

pub use folio_types::{MenuState, ScrollState, Section, SectionBox};

/// Vertical reference positions, in the host's length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Line below the top of the viewport used to pick the active section.
    pub reference_line: f64,
    /// Gap left above a section's top after jumping to it (fixed nav bar height).
    pub nav_offset: f64,
}

impl Default for Metrics {
    /// Pixel values for a browser-sized layout.
    fn default() -> Self {
        Self {
            reference_line: 100.0,
            nav_offset: 80.0,
        }
    }
}

impl Metrics {
    /// Row-based metrics for a layout whose fixed navigation bar is
    /// `nav_height` rows tall. The reference line sits one row below the bar.
    #[must_use]
    pub fn for_rows(nav_height: u16) -> Self {
        let nav = f64::from(nav_height);
        Self {
            reference_line: nav + 1.0,
            nav_offset: nav,
        }
    }
}
