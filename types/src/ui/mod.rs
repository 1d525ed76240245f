//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod menu_slide;

pub use animation::{AnimPhase, EffectTimer, ease_out_cubic};
pub use menu_slide::{MenuSlide, SlideDirection};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disables panel slides and makes smooth scrolling instantaneous.
    pub reduced_motion: bool,
}
