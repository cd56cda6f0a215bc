//! Draws the decorative background straight into the frame buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::time::Instant;

use super::theme::Palette;
use crate::effects::{Background, ShapeKind};

fn bubble_glyph(size: f64) -> &'static str {
    if size < 35.0 {
        "∘"
    } else if size < 55.0 {
        "○"
    } else {
        "◯"
    }
}

fn shape_glyph(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Circle => "●",
        ShapeKind::Square => "◆",
        ShapeKind::Triangle => "▲",
    }
}

fn put(buf: &mut Buffer, area: Rect, x: f64, y: f64, symbol: &str, color: ratatui::style::Color) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (col, row) = (area.x.saturating_add(x as u16), area.y.saturating_add(y as u16));
    if col >= area.right() || row >= area.bottom() {
        return;
    }
    if let Some(cell) = buf.cell_mut((col, row)) {
        cell.set_symbol(symbol).set_fg(color);
    }
}

/// Shapes, then bubbles, then particles, with the pointer dot on top.
/// Nothing is drawn before the effects start.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    background: &Background,
    scroll: u16,
    now: Instant,
    palette: &Palette,
) {
    if !background.is_running() {
        return;
    }
    for (x, y, kind) in background.shape_positions(now) {
        put(buf, area, x, y, shape_glyph(kind), palette.bubble);
    }
    for (x, y, size) in background.bubble_positions(now, scroll) {
        put(buf, area, x, y, bubble_glyph(size), palette.bubble);
    }
    for (x, y) in background.particle_positions() {
        put(buf, area, x, y, "·", palette.particle);
    }
    if let Some((column, row)) = background.cursor() {
        put(buf, area, f64::from(column), f64::from(row), "•", palette.particle);
    }
}
