//! Time-based tween for item offsets
//!
//! Every item animates from the offset it is currently displayed at to its
//! new target. Time is passed in by the caller so the tween is fully
//! deterministic.

use std::time::{Duration, Instant};

/// Eased transition between two offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTransition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl OffsetTransition {
    /// A transition already resting at `value`
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Move towards `target`, starting from wherever the tween is at `now`
    ///
    /// Retargeting to the current target is a no-op so repeated identical
    /// renders do not restart the animation.
    pub fn retarget(&mut self, target: f32, duration: Duration, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started_at = now;
        self.duration = duration;
    }

    /// Displayed offset at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * ease_out(t)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

// Quadratic ease-out
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_is_idle() {
        let now = Instant::now();
        let tween = OffsetTransition::settled(-100.0, now);
        assert_eq!(tween.value_at(now), -100.0);
        assert!(!tween.is_running(now));
    }

    #[test]
    fn test_runs_to_target() {
        let start = Instant::now();
        let mut tween = OffsetTransition::settled(0.0, start);
        tween.retarget(-100.0, Duration::from_millis(200), start);
        assert!(tween.is_running(start));
        assert_eq!(tween.value_at(start), 0.0);

        let halfway = tween.value_at(start + Duration::from_millis(100));
        // Ease-out covers more than half the distance at half time
        assert!(halfway < -50.0 && halfway > -100.0);

        let end = start + Duration::from_millis(200);
        assert_eq!(tween.value_at(end), -100.0);
        assert!(!tween.is_running(end));
    }

    #[test]
    fn test_retarget_starts_from_displayed_value() {
        let start = Instant::now();
        let mut tween = OffsetTransition::settled(0.0, start);
        tween.retarget(-100.0, Duration::from_millis(100), start);
        let mid = start + Duration::from_millis(50);
        let shown = tween.value_at(mid);
        tween.retarget(0.0, Duration::from_millis(100), mid);
        assert_eq!(tween.value_at(mid), shown);
        assert_eq!(tween.target(), 0.0);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let start = Instant::now();
        let mut tween = OffsetTransition::settled(0.0, start);
        tween.retarget(-100.0, Duration::from_millis(100), start);
        let later = start + Duration::from_millis(60);
        let before = tween;
        tween.retarget(-100.0, Duration::from_millis(100), later);
        assert_eq!(tween, before);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let now = Instant::now();
        let mut tween = OffsetTransition::settled(0.0, now);
        tween.retarget(42.0, Duration::ZERO, now);
        assert_eq!(tween.value_at(now), 42.0);
    }
}
