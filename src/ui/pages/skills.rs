use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use std::time::Instant;

use super::{draw_revealed, PageLayout};
use crate::app::App;
use crate::router::PageId;
use crate::skills::{Skill, SkillReveal, CATEGORIES};
use crate::ui::reveal::RevealMotion;
use crate::ui::theme::Palette;

const NAME_WIDTH: usize = 12;
/// Narrower than this the categories stack.
const COLUMNS_WIDTH: u16 = 90;

fn bar_line(skill: &Skill, reveal: &SkillReveal, now: Instant, width: u16, palette: &Palette) -> Line<'static> {
    let bar_width = usize::from(width).saturating_sub(NAME_WIDTH + 7).max(4);
    let filled = ((reveal.width_at(skill, now) / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);
    Line::from(vec![
        Span::styled(format!("{:<NAME_WIDTH$}", skill.name), palette.text()),
        Span::styled("█".repeat(filled), palette.heading()),
        Span::styled("░".repeat(bar_width - filled), palette.muted()),
        Span::styled(format!(" {:>3}%", skill.level), palette.muted()),
    ])
}

fn category_height(skills: usize) -> u16 {
    u16::try_from(skills).unwrap_or(u16::MAX).saturating_add(2)
}

/// One column per category when wide, otherwise one category under the next.
pub fn layout(width: u16) -> PageLayout {
    let count = CATEGORIES.len() as u16;
    let blocks: Vec<Rect> = if width >= COLUMNS_WIDTH {
        let tallest = CATEGORIES
            .iter()
            .map(|category| category_height(category.skills.len()))
            .max()
            .unwrap_or(0);
        let column = width / count;
        (0..count)
            .map(|i| {
                let x = i * column;
                let w = if i + 1 == count { width - x } else { column };
                Rect::new(x, 0, w, tallest)
            })
            .collect()
    } else {
        let mut y = 0;
        CATEGORIES
            .iter()
            .map(|category| {
                let height = category_height(category.skills.len());
                let block = Rect::new(0, y, width, height);
                y += height + 1;
                block
            })
            .collect()
    };
    PageLayout::from_blocks(blocks)
}

pub fn render(buf: &mut Buffer, layout: &PageLayout, app: &App, now: Instant, palette: &Palette) {
    for (index, (category, area)) in CATEGORIES.iter().zip(&layout.blocks).enumerate() {
        let inner_width = area.width.saturating_sub(2);
        let lines: Vec<Line> = category
            .skills
            .iter()
            .map(|skill| bar_line(skill, &app.skills, now, inner_width, palette))
            .collect();
        draw_revealed(
            buf,
            *area,
            RevealMotion::Rise,
            app.reveal_progress(PageId::Skills, index, index, now),
            Paragraph::new(lines).block(
                Block::bordered()
                    .title(format!(" {} ", category.title))
                    .border_style(palette.muted()),
            ),
        );
    }
}
