//! Easing and time-based tweens for the small animations the UI plays.

use std::time::{Duration, Instant};

/// Cubic ease-out (`power2.out` in most animation libraries).
pub fn ease_out_power2(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// A one-shot animation from 0 to 1 over `duration`, after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    start: Instant,
    delay: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(start: Instant, delay: Duration, duration: Duration) -> Self {
        Self {
            start,
            delay,
            duration,
        }
    }

    /// Linear progress at `now`, clamped to `0.0..=1.0`.
    pub fn linear_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start);
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased progress at `now`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        ease_out_power2(self.linear_at(now))
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.linear_at(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_power2(0.0), 0.0);
        assert_eq!(ease_out_power2(1.0), 1.0);
        assert_eq!(ease_out_power2(2.0), 1.0);
        assert!(ease_out_power2(0.5) > 0.5);
    }

    #[test]
    fn test_tween_waits_for_delay() {
        let start = Instant::now();
        let tween = Tween::new(start, Duration::from_millis(500), Duration::from_millis(1500));

        assert_eq!(tween.linear_at(start + Duration::from_millis(400)), 0.0);
        let mid = tween.linear_at(start + Duration::from_millis(1250));
        assert!((mid - 0.5).abs() < 1e-9);
        assert!(tween.is_finished_at(start + Duration::from_secs(2)));
        assert_eq!(tween.progress_at(start + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_after_delay() {
        let start = Instant::now();
        let tween = Tween::new(start, Duration::ZERO, Duration::ZERO);
        assert_eq!(tween.linear_at(start), 1.0);
    }
}
