//! Slide animation for the overlay menu panel.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Panel enters from the right edge.
    Opening,
    /// Panel leaves toward the right edge; drawn after the menu is already closed.
    Closing,
}

#[derive(Debug, Clone)]
pub struct MenuSlide {
    direction: SlideDirection,
    timer: EffectTimer,
}

impl MenuSlide {
    #[must_use]
    pub fn opening(duration: Duration) -> Self {
        Self {
            direction: SlideDirection::Opening,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn closing(duration: Duration) -> Self {
        Self {
            direction: SlideDirection::Closing,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Fraction of the panel width currently on screen, in `[0, 1]`.
    #[must_use]
    pub fn visible_fraction(&self) -> f32 {
        let t = super::ease_out_cubic(self.timer.progress());
        match self.direction {
            SlideDirection::Opening => t,
            SlideDirection::Closing => 1.0 - t,
        }
    }
}
