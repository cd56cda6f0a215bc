//! Transition animations and the visuals a page carries during one.

use rand::Rng;
use std::fmt;
use std::time::Duration;

/// Exit visual duration before the swap.
pub const EXIT_DURATION: Duration = Duration::from_millis(500);
/// Gap between the swap and the enter-active visual.
pub const ENTER_SETTLE: Duration = Duration::from_millis(50);
/// Enter-active visual duration before the page settles.
pub const ENTER_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionAnimation {
    Fade,
    Slide,
    Rise,
    Rotate,
    Pop,
    Skate,
    Wipe,
}

impl TransitionAnimation {
    pub const ALL: [TransitionAnimation; 7] = [
        TransitionAnimation::Fade,
        TransitionAnimation::Slide,
        TransitionAnimation::Rise,
        TransitionAnimation::Rotate,
        TransitionAnimation::Pop,
        TransitionAnimation::Skate,
        TransitionAnimation::Wipe,
    ];

    /// Uniformly random choice over [`TransitionAnimation::ALL`].
    pub fn random() -> Self {
        let index = rand::rng().random_range(0..Self::ALL.len());
        Self::ALL[index]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionAnimation::Fade => "fade",
            TransitionAnimation::Slide => "slide",
            TransitionAnimation::Rise => "rise",
            TransitionAnimation::Rotate => "rotate",
            TransitionAnimation::Pop => "pop",
            TransitionAnimation::Skate => "skate",
            TransitionAnimation::Wipe => "wipe",
        }
    }
}

impl fmt::Display for TransitionAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transitional visual attached to a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVisual {
    /// Leaving page, before the swap.
    Exit(TransitionAnimation),
    /// Entering page, right after the swap.
    Enter(TransitionAnimation),
    /// Entering page, animating into place.
    EnterActive(TransitionAnimation),
}

impl PageVisual {
    pub fn animation(&self) -> TransitionAnimation {
        match self {
            PageVisual::Exit(a) | PageVisual::Enter(a) | PageVisual::EnterActive(a) => *a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_covers_the_set() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(TransitionAnimation::random());
        }
        assert_eq!(seen.len(), TransitionAnimation::ALL.len());
    }
}
