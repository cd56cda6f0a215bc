//! Entrance and scroll-triggered reveals for page content.
//!
//! Both only produce timing: an eased progress in `0.0..=1.0` per item. The
//! UI turns progress into an offset and a dim or hidden state.

use std::time::{Duration, Instant};

use crate::anim::Tween;

/// Timing for a list of items that enter one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Before the first item starts.
    pub delay: Duration,
    /// Between the starts of consecutive items.
    pub step: Duration,
    /// Length of each item's own animation.
    pub duration: Duration,
}

impl Stagger {
    pub const fn from_millis(delay: u64, step: u64, duration: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay),
            step: Duration::from_millis(step),
            duration: Duration::from_millis(duration),
        }
    }

    /// When the item at `index` starts moving, measured from the list's start.
    pub fn start_of(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay.saturating_add(self.step.saturating_mul(index))
    }

    /// When the item at `index` has fully arrived.
    pub fn end_of(&self, index: usize) -> Duration {
        self.start_of(index).saturating_add(self.duration)
    }

    pub fn tween(&self, start: Instant, index: usize) -> Tween {
        Tween::new(start, self.start_of(index), self.duration)
    }
}

/// Project cards: 0.6 s each, 0.1 s apart, after 0.2 s.
pub const CARD_ENTRANCE: Stagger = Stagger::from_millis(200, 100, 600);
/// Skill categories: 0.8 s each, 0.2 s apart, after 0.2 s.
pub const CATEGORY_ENTRANCE: Stagger = Stagger::from_millis(200, 200, 800);
/// About page: the bio at 0.2 s, then the stats panel at 0.4 s.
pub const ABOUT_ENTRANCE: Stagger = Stagger::from_millis(200, 200, 1000);

/// Entrance of the current page's items.
///
/// Until the first [`start`](Self::start) every item counts as arrived, so a
/// page that was never initialized still draws its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaggeredReveal {
    started: Option<(Instant, Stagger)>,
}

impl StaggeredReveal {
    /// Restart every item from hidden at `now`.
    pub fn start(&mut self, now: Instant, stagger: Stagger) {
        self.started = Some((now, stagger));
    }

    /// Eased progress of the item at `index`.
    pub fn progress(&self, index: usize, now: Instant) -> f64 {
        match self.started {
            Some((start, stagger)) => stagger.tween(start, index).progress_at(now),
            None => 1.0,
        }
    }

    /// Whether any of the first `count` items is still moving.
    pub fn is_animating(&self, count: usize, now: Instant) -> bool {
        let Some((start, stagger)) = self.started else {
            return false;
        };
        count > 0 && !stagger.tween(start, count - 1).is_finished_at(now)
    }
}

/// Fraction of the viewport height a block's top must rise above to play.
pub const SCROLL_TRIGGER: f64 = 0.8;
pub const SCROLL_REVEAL_DURATION: Duration = Duration::from_secs(1);

/// Viewport row of the trigger line.
pub fn trigger_row(viewport_height: u16) -> i32 {
    (f64::from(viewport_height) * SCROLL_TRIGGER).floor() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    /// In view when first seen; the entrance animation covers it.
    Shown,
    /// Below the trigger line.
    Waiting,
    /// Crossed the line by scrolling.
    Playing(Tween),
}

/// Per-block scroll triggers for the current page.
///
/// A block whose top is above the trigger line the first time it is seen is
/// simply shown. A block that starts below waits, plays its reveal once
/// scrolling brings its top over the line, and hides again if scrolled back
/// below it.
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    blocks: Vec<Option<Trigger>>,
}

impl ScrollReveal {
    /// Forget every block, as when a new page is shown.
    pub fn reset(&mut self) {
        self.blocks.clear();
    }

    /// Record block `index` at viewport row `top` (negative when above the viewport).
    pub fn observe(&mut self, index: usize, top: i32, viewport_height: u16, now: Instant) {
        if self.blocks.len() <= index {
            self.blocks.resize(index + 1, None);
        }
        let below = top > trigger_row(viewport_height);
        let slot = &mut self.blocks[index];
        *slot = Some(match (*slot, below) {
            (_, true) => Trigger::Waiting,
            (None, false) => Trigger::Shown,
            (Some(Trigger::Waiting), false) => {
                Trigger::Playing(Tween::new(now, Duration::ZERO, SCROLL_REVEAL_DURATION))
            }
            (Some(kept), false) => kept,
        });
    }

    /// Record every block of a page from the viewport rows of their tops.
    ///
    /// With the body scrolled as far as it goes (`at_end`) a block whose top
    /// is inside the viewport counts as over the line, since no more
    /// scrolling can bring it there.
    pub fn observe_all(
        &mut self,
        tops: impl IntoIterator<Item = i32>,
        viewport_height: u16,
        at_end: bool,
        now: Instant,
    ) {
        let line = trigger_row(viewport_height);
        for (index, top) in tops.into_iter().enumerate() {
            let top = if at_end && top < i32::from(viewport_height) {
                top.min(line)
            } else {
                top
            };
            self.observe(index, top, viewport_height, now);
        }
    }

    /// Eased reveal of block `index`. Blocks never observed count as shown.
    pub fn progress(&self, index: usize, now: Instant) -> f64 {
        match self.blocks.get(index).copied().flatten() {
            None | Some(Trigger::Shown) => 1.0,
            Some(Trigger::Waiting) => 0.0,
            Some(Trigger::Playing(tween)) => tween.progress_at(now),
        }
    }
}
