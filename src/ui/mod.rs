//! Frame rendering.
//!
//! Draw order is background, navigation bar, the visible page placed by its
//! transition visual, the transition overlay, then the key hints. The
//! loading screen replaces all of it until it hides.

mod background;
mod loading;
mod nav;
mod pages;
mod reveal;
pub mod theme;
pub mod transition;

pub use pages::{page_layout, PageLayout, FIRST_CARD_BLOCK};
pub use theme::Palette;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::time::Instant;

use crate::app::App;
use crate::contact::FormFocus;
use crate::router::PageId;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    if !app.loading.is_hidden() {
        loading::render(frame, area, &app.loading, now, &palette);
        return;
    }

    let snapshot = app.router.snapshot();
    let page = snapshot.visible_page();
    let scroll = app.scroll.offset_for(page);
    background::render(frame.buffer_mut(), area, &app.background, scroll, now, &palette);

    let [nav_area, body, footer] = screen_areas(area);
    let scrolled = app.scroll.page() == page && app.scroll.is_scrolled();
    nav::render(frame, nav_area, &snapshot, app.theme, scrolled, &palette);

    let visual = snapshot.section(page).and_then(|section| section.visual);
    let progress = transition::stage_progress(visual, snapshot.stage_started, now);
    let placement = transition::place(body, visual, progress);
    pages::render_page(frame, placement.area, app, page, now, &palette);
    if placement.dim {
        frame
            .buffer_mut()
            .set_style(placement.area, Style::default().add_modifier(Modifier::DIM));
    }

    if snapshot.overlay_visible {
        let band = transition::overlay_rect(body, progress);
        frame
            .buffer_mut()
            .set_style(band, Style::default().bg(palette.overlay));
    }

    render_hints(frame, footer, app, page, &palette);
}

fn screen_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// The page body within a terminal of `size`, between the navigation bar and the hints.
pub fn body_area(size: Rect) -> Rect {
    screen_areas(size)[1]
}

fn hints(app: &App, page: PageId) -> &'static str {
    match page {
        PageId::Home => "Enter projects · c contact · ←/→ pages · t theme · q quit",
        PageId::About => "r retry · J/K scroll · ←/→ pages · t theme · q quit",
        PageId::Projects => "f filter · ↑/↓ select · J/K scroll · Enter open · d demo · r retry · q quit",
        PageId::Skills => "J/K scroll · ←/→ pages · t theme · q quit",
        PageId::Contact => match app.contact.focus() {
            FormFocus::Field(_) => "Tab next field · Esc to button · PgUp/PgDn pages · Ctrl+C quit",
            FormFocus::Submit => "Enter send · Tab fields · ←/→ pages · q quit",
        },
    }
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App, page: PageId, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints(app, page), palette.muted()))),
        area,
    );
}
