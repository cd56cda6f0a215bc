//! Geometry of entrance and scroll reveals.
//!
//! A block cannot fade in a terminal, so a revealing block is hidden at
//! first, then drawn dimmed and displaced, then settles into its full area.

use ratatui::layout::Rect;

use super::transition::Placement;

/// How a block moves into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMotion {
    /// Rises from a little below.
    Rise,
    /// Slides in from the left.
    FromLeft,
    /// Slides in from the right.
    FromRight,
    /// Grows from a smaller box around its center.
    Grow,
}

/// Rows a rising block starts below its place.
pub const RISE_ROWS: u16 = 2;
/// Columns a sliding block starts away from its place.
pub const SLIDE_COLUMNS: u16 = 6;
/// Starting scale of a growing block.
pub const GROW_FROM: f64 = 0.8;
/// Below this progress nothing is drawn.
pub const VISIBLE_FROM: f64 = 0.15;
/// Below this progress the block is drawn dimmed.
pub const SOLID_FROM: f64 = 0.6;

fn remaining(length: u16, progress: f64) -> u16 {
    (f64::from(length) * (1.0 - progress)).round() as u16
}

/// Where to draw `area` at reveal `progress`, or `None` while it is still invisible.
///
/// The result always lies inside `area`.
pub fn reveal(area: Rect, motion: RevealMotion, progress: f64) -> Option<Placement> {
    let progress = progress.clamp(0.0, 1.0);
    if progress < VISIBLE_FROM {
        return None;
    }
    let dim = progress < SOLID_FROM;

    let rect = match motion {
        RevealMotion::Rise => {
            let shift = remaining(RISE_ROWS, progress).min(area.height);
            Rect::new(area.x, area.y + shift, area.width, area.height - shift)
        }
        RevealMotion::FromLeft => {
            let shift = remaining(SLIDE_COLUMNS, progress).min(area.width);
            Rect::new(area.x, area.y, area.width - shift, area.height)
        }
        RevealMotion::FromRight => {
            let shift = remaining(SLIDE_COLUMNS, progress).min(area.width);
            Rect::new(area.x + shift, area.y, area.width - shift, area.height)
        }
        RevealMotion::Grow => {
            let scale = GROW_FROM + (1.0 - GROW_FROM) * progress;
            let width = (f64::from(area.width) * scale).round() as u16;
            let height = (f64::from(area.height) * scale).round() as u16;
            Rect::new(
                area.x + (area.width - width) / 2,
                area.y + (area.height - height) / 2,
                width,
                height,
            )
        }
    };

    Some(Placement { area: rect, dim })
}
