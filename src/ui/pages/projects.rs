use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use std::time::Instant;

use super::{draw_revealed, PageLayout};
use crate::app::App;
use crate::github::render::{
    project_card_lines, projects_error_lines, projects_loading_lines, visible_projects,
};
use crate::github::{LoadState, ProjectFilter};
use crate::router::PageId;
use crate::ui::reveal::RevealMotion;
use crate::ui::theme::Palette;

const CARD_HEIGHT: u16 = 9;
const FILTER_HEIGHT: u16 = 2;
/// Narrower than this the grid has a single column.
const TWO_COLUMN_WIDTH: u16 = 70;

/// Layout block of the first card or of the placeholder; the filter bar
/// comes before it.
pub const FIRST_CARD_BLOCK: usize = 1;

fn filter_bar(active: ProjectFilter, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled("Filter [f]: ", palette.muted())];
    for filter in ProjectFilter::ALL {
        let style = if filter == active {
            palette.heading().add_modifier(Modifier::REVERSED)
        } else {
            palette.muted()
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// What the grid shows instead of cards.
fn placeholder(app: &App, palette: &Palette) -> Option<Vec<Line<'static>>> {
    match &app.projects {
        LoadState::Idle | LoadState::Loading => Some(projects_loading_lines(palette)),
        LoadState::Failed(category) => Some(projects_error_lines(*category, palette)),
        LoadState::Loaded(projects) => visible_projects(projects, app.project_filter)
            .is_empty()
            .then(|| vec![Line::styled("No projects in this category", palette.muted())]),
    }
}

fn visible_count(app: &App) -> usize {
    app.projects
        .loaded()
        .map_or(0, |projects| visible_projects(projects, app.project_filter).len())
}

fn columns(width: u16) -> u16 {
    if width < TWO_COLUMN_WIDTH {
        1
    } else {
        2
    }
}

/// Filter bar, then either a placeholder or one block per visible card.
pub fn layout(app: &App, width: u16) -> PageLayout {
    let mut blocks = vec![Rect::new(0, 0, width, FILTER_HEIGHT)];

    let palette = Palette::for_theme(app.theme);
    if let Some(lines) = placeholder(app, &palette) {
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        blocks.push(Rect::new(0, FILTER_HEIGHT, width, height));
        return PageLayout::from_blocks(blocks);
    }

    let columns = columns(width);
    let column_width = width / columns;
    for index in 0..visible_count(app) {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        let (row, column) = (index / columns, index % columns);
        let x = column * column_width;
        let w = if column + 1 == columns { width - x } else { column_width };
        blocks.push(Rect::new(
            x,
            FILTER_HEIGHT.saturating_add(row.saturating_mul(CARD_HEIGHT)),
            w,
            CARD_HEIGHT,
        ));
    }
    PageLayout::from_blocks(blocks)
}

pub fn render(buf: &mut Buffer, layout: &PageLayout, app: &App, now: Instant, palette: &Palette) {
    let Some((bar, grid)) = layout.blocks.split_first() else {
        return;
    };
    Paragraph::new(filter_bar(app.project_filter, palette)).render(*bar, buf);

    if let Some(lines) = placeholder(app, palette) {
        if let Some(area) = grid.first() {
            draw_revealed(
                buf,
                *area,
                RevealMotion::Grow,
                app.reveal_progress(PageId::Projects, 0, FIRST_CARD_BLOCK, now),
                Paragraph::new(lines),
            );
        }
        return;
    }

    let Some(projects) = app.projects.loaded() else {
        return;
    };
    let visible = visible_projects(projects, app.project_filter);
    for (index, (project, cell)) in visible.iter().zip(grid).enumerate() {
        let border = if index == app.selected_project {
            palette.heading()
        } else {
            palette.muted()
        };
        draw_revealed(
            buf,
            *cell,
            RevealMotion::Rise,
            app.reveal_progress(PageId::Projects, index, index + FIRST_CARD_BLOCK, now),
            Paragraph::new(project_card_lines(
                project,
                cell.width.saturating_sub(2) as usize,
                palette,
            ))
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(format!(" {} ", project.category.as_str()))
                    .border_style(border),
            ),
        );
    }
}
