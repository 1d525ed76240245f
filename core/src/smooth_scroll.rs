//! Time-based smooth scroll between two offsets.

use std::time::Duration;

use folio_types::ui::{EffectTimer, ease_out_cubic};

/// Ease-out animation from `from` to `to`.
///
/// Once finished, [`SmoothScroll::current`] returns `to` exactly so the
/// settled state matches an instant jump.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    timer: EffectTimer,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        if self.timer.is_finished() {
            return self.to;
        }
        let t = f64::from(ease_out_cubic(self.timer.progress()));
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
