//! One renderer per page section.
//!
//! Home and Contact draw straight into the frame. The longer pages lay their
//! blocks out on a canvas as tall as their content, and the rows under the
//! scroll offset are copied into the body.

mod about;
mod contact;
mod home;
mod projects;
mod skills;

pub use projects::FIRST_CARD_BLOCK;

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::Frame;
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

use super::reveal::{reveal, RevealMotion};
use super::theme::Palette;
use crate::app::App;
use crate::router::PageId;

/// Blocks of a page body in content coordinates, in reveal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub blocks: Vec<Rect>,
    /// Rows of content.
    pub height: u16,
}

impl PageLayout {
    fn from_blocks(blocks: Vec<Rect>) -> Self {
        let height = blocks.iter().map(|block| block.bottom()).max().unwrap_or(0);
        Self { blocks, height }
    }

    /// Furthest the body can scroll in a viewport `viewport_height` rows tall.
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    /// The offset closest to `offset` that shows all of block `index`, or its
    /// top when the block is taller than the viewport.
    pub fn offset_showing(&self, index: usize, offset: u16, viewport_height: u16) -> u16 {
        let Some(block) = self.blocks.get(index) else {
            return offset;
        };
        if block.y < offset {
            block.y
        } else if block.bottom() > offset.saturating_add(viewport_height) {
            block.bottom().saturating_sub(viewport_height).min(block.y)
        } else {
            offset
        }
    }

    /// Viewport row of each block's top when scrolled to `offset`.
    pub fn tops(&self, offset: u16) -> impl Iterator<Item = i32> + '_ {
        self.blocks
            .iter()
            .map(move |block| i32::from(block.y) - i32::from(offset))
    }
}

/// Layout of `page` in a body `width` columns wide and `viewport_height` rows tall.
/// Pages that never scroll have no blocks.
pub fn page_layout(app: &App, page: PageId, width: u16, viewport_height: u16) -> PageLayout {
    match page {
        PageId::About => about::layout(app, width, viewport_height),
        PageId::Projects => projects::layout(app, width),
        PageId::Skills => skills::layout(width),
        PageId::Home | PageId::Contact => PageLayout::default(),
    }
}

pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    page: PageId,
    now: Instant,
    palette: &Palette,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    match page {
        PageId::Home => home::render(frame, area, app, palette),
        PageId::About => render_scrolled(frame, area, app, page, |buf, layout| {
            about::render(buf, layout, app, now, palette)
        }),
        PageId::Projects => render_scrolled(frame, area, app, page, |buf, layout| {
            projects::render(buf, layout, app, now, palette)
        }),
        PageId::Skills => render_scrolled(frame, area, app, page, |buf, layout| {
            skills::render(buf, layout, app, now, palette)
        }),
        PageId::Contact => contact::render(frame, area, app, palette),
    }
}

fn render_scrolled(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    page: PageId,
    draw: impl FnOnce(&mut Buffer, &PageLayout),
) {
    let layout = page_layout(app, page, area.width, area.height);
    let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, layout.height.max(area.height)));
    draw(&mut canvas, &layout);
    blit(&canvas, app.scroll.offset_for(page), frame.buffer_mut(), area);
}

/// Untouched canvas cells let the background show through.
fn is_blank(cell: &Cell) -> bool {
    cell.symbol() == " " && cell.bg == Color::Reset && cell.modifier.is_empty()
}

/// Copy the canvas rows starting at `offset` into `area` of `target`.
fn blit(canvas: &Buffer, offset: u16, target: &mut Buffer, area: Rect) {
    for row in 0..area.height {
        let source_row = offset.saturating_add(row);
        if source_row >= canvas.area.height {
            break;
        }
        // columns still covered by a wide glyph copied just before
        let mut covered = 0usize;
        for column in 0..area.width.min(canvas.area.width) {
            let Some(cell) = canvas.cell((column, source_row)) else {
                continue;
            };
            if covered > 0 {
                covered -= 1;
            } else if is_blank(cell) {
                continue;
            } else {
                covered = cell.symbol().width().saturating_sub(1);
            }
            if let Some(slot) = target.cell_mut((area.x + column, area.y + row)) {
                // unset colors keep the theme's colors underneath
                let (fg, bg) = (slot.fg, slot.bg);
                *slot = cell.clone();
                if slot.fg == Color::Reset {
                    slot.fg = fg;
                }
                if slot.bg == Color::Reset {
                    slot.bg = bg;
                }
            }
        }
    }
}

/// Draw `widget` into `area` the way it looks at reveal `progress`.
fn draw_revealed<W: Widget>(
    buf: &mut Buffer,
    area: Rect,
    motion: RevealMotion,
    progress: f64,
    widget: W,
) {
    let Some(placement) = reveal(area, motion, progress) else {
        return;
    };
    if placement.area.is_empty() {
        return;
    }
    widget.render(placement.area, buf);
    if placement.dim {
        buf.set_style(placement.area, Style::default().add_modifier(Modifier::DIM));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::from_blocks(vec![
            Rect::new(0, 0, 40, 2),
            Rect::new(0, 2, 40, 9),
            Rect::new(0, 11, 40, 9),
            Rect::new(0, 20, 40, 9),
        ])
    }

    #[test]
    fn test_height_and_max_offset() {
        let layout = layout();
        assert_eq!(layout.height, 29);
        assert_eq!(layout.max_offset(20), 9);
        assert_eq!(layout.max_offset(40), 0);
        assert_eq!(PageLayout::default().max_offset(10), 0);
    }

    #[test]
    fn test_offset_showing_scrolls_the_least() {
        let layout = layout();
        // already in view
        assert_eq!(layout.offset_showing(1, 0, 20), 0);
        // below: bring its bottom to the viewport's bottom
        assert_eq!(layout.offset_showing(3, 0, 20), 9);
        // above: bring its top to the viewport's top
        assert_eq!(layout.offset_showing(1, 9, 20), 2);
        // taller than the viewport: its top wins
        assert_eq!(layout.offset_showing(3, 0, 5), 20);
        assert_eq!(layout.offset_showing(9, 4, 20), 4);
    }

    #[test]
    fn test_tops_follow_offset() {
        let tops: Vec<i32> = layout().tops(5).collect();
        assert_eq!(tops, vec![-5, -3, 6, 15]);
    }

    #[test]
    fn test_blit_copies_visible_rows_and_keeps_background() {
        let mut canvas = Buffer::empty(Rect::new(0, 0, 4, 6));
        canvas.set_string(0, 3, "ab", Style::default());
        let mut target = Buffer::empty(Rect::new(0, 0, 4, 3));
        target.set_string(0, 0, "~~~~", Style::default());

        blit(&canvas, 2, &mut target, Rect::new(0, 0, 4, 3));
        assert_eq!(target.cell((0, 0)).map(Cell::symbol), Some("~"));
        assert_eq!(target.cell((0, 1)).map(Cell::symbol), Some("a"));
        assert_eq!(target.cell((1, 1)).map(Cell::symbol), Some("b"));
        assert_eq!(target.cell((2, 1)).map(Cell::symbol), Some(" "));
    }

    #[test]
    fn test_blit_keeps_theme_colors_under_unstyled_text() {
        let mut canvas = Buffer::empty(Rect::new(0, 0, 2, 1));
        canvas.set_string(0, 0, "a", Style::default());
        canvas.set_string(1, 0, "b", Style::default().fg(Color::Red));
        let mut target = Buffer::empty(Rect::new(0, 0, 2, 1));
        target.set_style(target.area, Style::default().fg(Color::White).bg(Color::Black));

        blit(&canvas, 0, &mut target, Rect::new(0, 0, 2, 1));
        let a = target.cell((0, 0)).expect("cell");
        assert_eq!((a.fg, a.bg), (Color::White, Color::Black));
        let b = target.cell((1, 0)).expect("cell");
        assert_eq!((b.fg, b.bg), (Color::Red, Color::Black));
    }

    #[test]
    fn test_hidden_block_draws_nothing() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        draw_revealed(&mut buf, area, RevealMotion::Rise, 0.0, ratatui::widgets::Block::bordered());
        assert!(buf.content().iter().all(is_blank));

        draw_revealed(&mut buf, area, RevealMotion::Rise, 1.0, ratatui::widgets::Block::bordered());
        assert_eq!(buf.cell((0, 0)).map(Cell::symbol), Some("┌"));
    }
}
