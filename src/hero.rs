//! Hero section typing animation.

use std::time::{Duration, Instant};

/// Roles cycled by the hero headline.
pub const ROLES: [&str; 5] = [
    "Full Stack Developer",
    "Frontend Specialist",
    "Backend Engineer",
    "UI/UX Enthusiast",
    "Problem Solver",
];

pub const TYPE_SPEED: Duration = Duration::from_millis(100);
pub const DELETE_SPEED: Duration = Duration::from_millis(50);
pub const PAUSE_TIME: Duration = Duration::from_millis(2000);

/// Types a phrase one character at a time, pauses, deletes it, and moves on.
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: &'static [&'static str],
    text_index: usize,
    chars: usize,
    deleting: bool,
    next_step: Instant,
}

impl Typewriter {
    /// The first character appears at `now`.
    pub fn new(texts: &'static [&'static str], now: Instant) -> Self {
        Self {
            texts,
            text_index: 0,
            chars: 0,
            deleting: false,
            next_step: now,
        }
    }

    pub fn roles(now: Instant) -> Self {
        Self::new(&ROLES, now)
    }

    /// Run every step that is due at `now`.
    ///
    /// After a stall longer than one type-pause-delete cycle (a suspended
    /// machine, say) the schedule restarts at `now` instead of replaying
    /// every missed keystroke.
    pub fn advance(&mut self, now: Instant) {
        if self.texts.is_empty() {
            return;
        }
        if now.saturating_duration_since(self.next_step) > self.cycle() {
            tracing::debug!("Typewriter fell behind, resuming from now");
            self.next_step = now;
        }
        while now >= self.next_step {
            let wait = self.step();
            self.next_step += wait;
        }
    }

    /// Time to type, hold, and delete the current phrase.
    fn cycle(&self) -> Duration {
        let len = self.texts[self.text_index].chars().count() as u32;
        TYPE_SPEED * len + PAUSE_TIME + DELETE_SPEED * len
    }

    fn step(&mut self) -> Duration {
        let len = self.texts[self.text_index].chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }

        let mut wait = if self.deleting {
            DELETE_SPEED
        } else {
            TYPE_SPEED
        };

        if !self.deleting && self.chars == len {
            wait = PAUSE_TIME;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
        }

        wait
    }

    /// The currently typed prefix.
    pub fn text(&self) -> &str {
        let Some(full) = self.texts.get(self.text_index) else {
            return "";
        };
        let end = full
            .char_indices()
            .nth(self.chars)
            .map(|(i, _)| i)
            .unwrap_or(full.len());
        &full[..end]
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 2] = ["ab", "xyz"];

    #[test]
    fn test_types_then_pauses() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(&WORDS, t0);

        tw.advance(t0);
        assert_eq!(tw.text(), "a");
        tw.advance(t0 + Duration::from_millis(99));
        assert_eq!(tw.text(), "a");
        tw.advance(t0 + Duration::from_millis(100));
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());

        // full text holds for the pause
        tw.advance(t0 + Duration::from_millis(2099));
        assert_eq!(tw.text(), "ab");
        tw.advance(t0 + Duration::from_millis(2100));
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_moves_to_next_phrase_after_delete() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(&WORDS, t0);
        // type 2 (0, 100), pause until 2100, delete 2 (2100, 2150), next type at 2200
        tw.advance(t0 + Duration::from_millis(2150));
        assert_eq!(tw.text(), "");
        assert!(!tw.is_deleting());
        tw.advance(t0 + Duration::from_millis(2200));
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_long_stall_resumes_with_one_step() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(&WORDS, t0);
        tw.advance(t0);
        assert_eq!(tw.text(), "a");

        let woke = t0 + Duration::from_secs(3600);
        tw.advance(woke);
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());

        tw.advance(woke + PAUSE_TIME - Duration::from_millis(1));
        assert_eq!(tw.text(), "ab");
        tw.advance(woke + PAUSE_TIME);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_short_lag_still_catches_up() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(&WORDS, t0);
        // inside one cycle of "ab" (2300 ms): every missed step runs
        tw.advance(t0 + Duration::from_millis(2150));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_roles_start_empty() {
        let t0 = Instant::now();
        let tw = Typewriter::roles(t0);
        assert_eq!(tw.text(), "");
    }
}
