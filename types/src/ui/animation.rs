use std::time::Duration;

/// Where an effect is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AnimPhase, EffectTimer, ease_out_cubic, normalized_progress};

    #[test]
    fn zero_duration_is_complete() {
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f32::EPSILON);
        assert_eq!(EffectTimer::new(Duration::ZERO).phase(), AnimPhase::Completed);
    }

    #[test]
    fn easing_hits_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5, "ease-out front-loads motion");
    }

    #[test]
    fn timer_runs_then_completes() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(40));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if (progress - 0.4).abs() < 1e-3));
        timer.advance(Duration::from_millis(80));
        assert!(timer.is_finished());
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }
}
