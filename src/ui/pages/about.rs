use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

use super::{draw_revealed, PageLayout};
use crate::app::App;
use crate::github::render::stats_lines;
use crate::router::PageId;
use crate::ui::reveal::RevealMotion;
use crate::ui::theme::Palette;

const BIO: &[&str] = &[
    "I'm a developer who enjoys the whole stack, from database schemas to the last pixel.",
    "",
    "Most of my work lives on GitHub; the panel on the right is pulled live from the API.",
];

/// Narrower than this the stats panel goes under the bio.
const SIDE_BY_SIDE_WIDTH: u16 = 80;
/// Room for a wrapped language list.
const STATS_SLACK: u16 = 2;

const BIO_BLOCK: usize = 0;
const STATS_BLOCK: usize = 1;

fn bio_height(width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2)).max(1);
    let rows: usize = BIO.iter().map(|line| line.width().div_ceil(inner).max(1)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

fn stats_height(app: &App) -> u16 {
    let palette = Palette::for_theme(app.theme);
    let lines = stats_lines(&app.stats, 1.0, &palette).len();
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2 + STATS_SLACK)
}

/// Bio and stats side by side, filling the body, or stacked when narrow.
pub fn layout(app: &App, width: u16, viewport_height: u16) -> PageLayout {
    let stats = stats_height(app);
    if width >= SIDE_BY_SIDE_WIDTH {
        let half = width / 2;
        let height = stats.max(bio_height(half)).max(viewport_height);
        PageLayout::from_blocks(vec![
            Rect::new(0, 0, half, height),
            Rect::new(half, 0, width - half, height),
        ])
    } else {
        let bio = bio_height(width);
        PageLayout::from_blocks(vec![
            Rect::new(0, 0, width, bio),
            Rect::new(0, bio + 1, width, stats),
        ])
    }
}

pub fn render(buf: &mut Buffer, layout: &PageLayout, app: &App, now: Instant, palette: &Palette) {
    let [bio_area, stats_area] = layout.blocks.as_slice() else {
        return;
    };

    let bio: Vec<Line> = BIO
        .iter()
        .map(|line| Line::styled(*line, palette.text()))
        .collect();
    draw_revealed(
        buf,
        *bio_area,
        RevealMotion::FromLeft,
        app.reveal_progress(PageId::About, BIO_BLOCK, BIO_BLOCK, now),
        Paragraph::new(bio)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" About Me ").border_style(palette.muted())),
    );

    let lines = stats_lines(&app.stats, app.counter_progress(now), palette);
    draw_revealed(
        buf,
        *stats_area,
        RevealMotion::FromRight,
        app.reveal_progress(PageId::About, STATS_BLOCK, STATS_BLOCK, now),
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(" GitHub Stats ").border_style(palette.muted())),
    );
}
