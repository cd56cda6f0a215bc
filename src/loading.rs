//! Startup loading screen: a randomly advancing progress bar, then a fade-out.

use rand::Rng;
use std::time::{Duration, Instant};

pub const TICK: Duration = Duration::from_millis(100);
/// Largest random increment per tick.
pub const MAX_STEP: f64 = 15.0;
/// Pause at 100% before fading.
pub const HOLD: Duration = Duration::from_millis(500);
pub const FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Filling,
    Holding,
    Fading,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct LoadingScreen {
    progress: f64,
    phase: LoadingPhase,
    /// When the next tick or phase change is due.
    due: Instant,
}

impl LoadingScreen {
    pub fn new(now: Instant) -> Self {
        Self {
            progress: 0.0,
            phase: LoadingPhase::Filling,
            due: now + TICK,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whole percent shown next to the bar.
    pub fn percentage(&self) -> u8 {
        self.progress.floor().clamp(0.0, 100.0) as u8
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == LoadingPhase::Hidden
    }

    /// Screen opacity: 1 until the fade, 0 once hidden.
    pub fn opacity(&self, now: Instant) -> f64 {
        match self.phase {
            LoadingPhase::Filling | LoadingPhase::Holding => 1.0,
            LoadingPhase::Fading => {
                let remaining = self.due.saturating_duration_since(now);
                remaining.as_secs_f64() / FADE.as_secs_f64()
            }
            LoadingPhase::Hidden => 0.0,
        }
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        self.advance_with(now, &mut rand::rng())
    }

    /// Process every tick due at `now`. Returns true on the call that hides the screen.
    ///
    /// If `now` is more than a tick past the schedule, the schedule restarts
    /// at `now` and only one step runs.
    pub fn advance_with<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if self.phase != LoadingPhase::Hidden && now.saturating_duration_since(self.due) > TICK {
            self.due = now;
        }
        while self.phase != LoadingPhase::Hidden && now >= self.due {
            match self.phase {
                LoadingPhase::Filling => {
                    self.progress = (self.progress + rng.random_range(0.0..MAX_STEP)).min(100.0);
                    if self.progress >= 100.0 {
                        self.phase = LoadingPhase::Holding;
                        self.due += HOLD;
                    } else {
                        self.due += TICK;
                    }
                }
                LoadingPhase::Holding => {
                    self.phase = LoadingPhase::Fading;
                    self.due += FADE;
                }
                LoadingPhase::Fading => {
                    self.phase = LoadingPhase::Hidden;
                    tracing::debug!("Loading screen hidden");
                    return true;
                }
                LoadingPhase::Hidden => {}
            }
        }
        false
    }

    /// Jump straight to hidden. Returns true if it was still showing.
    pub fn skip(&mut self) -> bool {
        let was_visible = !self.is_hidden();
        self.progress = 100.0;
        self.phase = LoadingPhase::Hidden;
        was_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_progress_is_monotonic_and_capped() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut screen = LoadingScreen::new(t0);
        let mut last = 0.0;
        for tick in 1..=200 {
            screen.advance_with(t0 + TICK * tick, &mut rng);
            assert!(screen.progress() >= last);
            assert!(screen.progress() <= 100.0);
            last = screen.progress();
        }
        assert!(screen.is_hidden());
        assert_eq!(screen.percentage(), 100);
    }

    #[test]
    fn test_hold_then_fade_then_hide() {
        let t0 = Instant::now();
        let mut screen = LoadingScreen::new(t0);
        screen.progress = 99.999;
        let mut rng = StdRng::seed_from_u64(1);

        // the first tick either fills the bar or leaves it a hair short
        let mut now = t0 + TICK;
        screen.advance_with(now, &mut rng);
        while screen.phase() == LoadingPhase::Filling {
            now += TICK;
            screen.advance_with(now, &mut rng);
        }
        assert_eq!(screen.phase(), LoadingPhase::Holding);
        assert_eq!(screen.opacity(now), 1.0);

        assert!(!screen.advance_with(now + HOLD, &mut rng));
        assert_eq!(screen.phase(), LoadingPhase::Fading);
        assert!(screen.opacity(now + HOLD + FADE / 2) < 1.0);

        assert!(screen.advance_with(now + HOLD + FADE, &mut rng));
        assert!(screen.is_hidden());
        assert!(!screen.advance_with(now + HOLD + FADE * 4, &mut rng));
    }

    #[test]
    fn test_stall_runs_a_single_tick() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut screen = LoadingScreen::new(t0);

        let woke = t0 + Duration::from_secs(600);
        screen.advance_with(woke, &mut rng);
        assert_eq!(screen.phase(), LoadingPhase::Filling);
        assert!(screen.progress() < MAX_STEP);

        let after_one = screen.progress();
        screen.advance_with(woke + TICK - Duration::from_millis(1), &mut rng);
        assert_eq!(screen.progress(), after_one);
    }

    #[test]
    fn test_skip_hides() {
        let mut screen = LoadingScreen::new(Instant::now());
        assert!(screen.skip());
        assert!(!screen.skip());
        assert_eq!(screen.opacity(Instant::now()), 0.0);
    }
}
