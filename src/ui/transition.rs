//! Geometry of page transitions.
//!
//! A terminal cannot fade or rotate, so every animation is expressed as the
//! rectangle the page may draw into plus a dim flag, both pure functions of
//! the page's visual and how far its stage has run.

use ratatui::layout::Rect;
use std::time::Instant;

use crate::anim::ease_out_power2;
use crate::router::{PageVisual, TransitionAnimation, ENTER_DURATION, ENTER_SETTLE, EXIT_DURATION};

/// Where and how to draw a page this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub area: Rect,
    pub dim: bool,
}

/// Linear progress of the current stage, `0.0..=1.0`.
pub fn stage_progress(visual: Option<PageVisual>, started: Instant, now: Instant) -> f64 {
    let duration = match visual {
        None => return 1.0,
        Some(PageVisual::Exit(_)) => EXIT_DURATION,
        Some(PageVisual::Enter(_)) => ENTER_SETTLE,
        Some(PageVisual::EnterActive(_)) => ENTER_DURATION,
    };
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// How far the page is displaced from its resting place: 0 at rest, 1 fully away.
pub fn displacement(visual: Option<PageVisual>, progress: f64) -> f64 {
    match visual {
        None => 0.0,
        Some(PageVisual::Exit(_)) => ease_out_power2(progress),
        Some(PageVisual::Enter(_)) => 1.0,
        Some(PageVisual::EnterActive(_)) => 1.0 - ease_out_power2(progress),
    }
}

fn scale(length: u16, factor: f64) -> u16 {
    (f64::from(length) * factor.clamp(0.0, 1.0)).round() as u16
}

/// The rectangle the visible page draws into.
pub fn place(area: Rect, visual: Option<PageVisual>, progress: f64) -> Placement {
    let Some(visual) = visual else {
        return Placement { area, dim: false };
    };
    let away = displacement(Some(visual), progress);
    let keep = 1.0 - away;
    let entering = !matches!(visual, PageVisual::Exit(_));

    let (w, h) = (area.width, area.height);
    let kept_w = scale(w, keep);
    let kept_h = scale(h, keep);

    let rect = match visual.animation() {
        TransitionAnimation::Fade => area,
        // exits to the left, enters from the right
        TransitionAnimation::Slide if entering => Rect::new(area.x + (w - kept_w), area.y, kept_w, h),
        TransitionAnimation::Slide => Rect::new(area.x, area.y, kept_w, h),
        // the reverse of slide
        TransitionAnimation::Skate if entering => Rect::new(area.x, area.y, kept_w, h),
        TransitionAnimation::Skate => Rect::new(area.x + (w - kept_w), area.y, kept_w, h),
        TransitionAnimation::Rise if entering => Rect::new(area.x, area.y + (h - kept_h), w, kept_h),
        TransitionAnimation::Rise => Rect::new(area.x, area.y, w, kept_h),
        TransitionAnimation::Rotate => Rect::new(area.x + (w - kept_w) / 2, area.y, kept_w, h),
        TransitionAnimation::Pop => {
            let pop_w = scale(w, 1.0 - away * 0.5);
            let pop_h = scale(h, 1.0 - away * 0.5);
            Rect::new(
                area.x + (w - pop_w) / 2,
                area.y + (h - pop_h) / 2,
                pop_w,
                pop_h,
            )
        }
        TransitionAnimation::Wipe => Rect::new(area.x, area.y, kept_w, h),
    };

    Placement {
        area: rect,
        dim: away > 0.3,
    }
}

/// The band covered by the transition overlay: it sweeps across during the
/// exit stage and covers the whole body once the exit completes.
pub fn overlay_rect(area: Rect, progress: f64) -> Rect {
    Rect::new(area.x, area.y, scale(area.width, ease_out_power2(progress)), area.height)
}
