//! Ephemeral view state derived from scrolling and menu interaction.

use crate::Section;

/// Scroll-derived state: how far down the page the reader is, and which
/// section navigation should highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    progress_ratio: f64,
    active_section: Section,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress_ratio: 0.0,
            active_section: Section::Home,
        }
    }
}

impl ScrollState {
    /// Builds a state, clamping `progress_ratio` into `[0, 1]`. NaN becomes 0.
    #[must_use]
    pub fn new(progress_ratio: f64, active_section: Section) -> Self {
        let progress_ratio = if progress_ratio.is_nan() {
            0.0
        } else {
            progress_ratio.clamp(0.0, 1.0)
        };
        Self {
            progress_ratio,
            active_section,
        }
    }

    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        self.progress_ratio
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    /// Progress as a whole percentage (0-100), for bar widths and labels.
    #[must_use]
    pub fn percent(&self) -> u8 {
        (self.progress_ratio * 100.0).round() as u8
    }
}

/// Visibility of the mobile overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}
