//! Loading screen.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;
use std::time::Instant;

use super::theme::Palette;
use crate::loading::LoadingScreen;

pub fn render(frame: &mut Frame, area: Rect, screen: &LoadingScreen, now: Instant, palette: &Palette) {
    // fading is approximated by dropping to the muted color halfway through
    let color = if screen.opacity(now) > 0.5 {
        palette.foreground
    } else {
        palette.dim
    };

    let [column] = Layout::horizontal([Constraint::Length(40)])
        .flex(Flex::Center)
        .areas(area);
    let [title, _, gauge] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    frame.render_widget(
        Paragraph::new(Line::from("Loading portfolio").centered()).style(Style::default().fg(color)),
        title,
    );
    frame.render_widget(
        Gauge::default()
            .ratio(screen.progress() / 100.0)
            .label(format!("{}%", screen.percentage()))
            .gauge_style(Style::default().fg(color).bg(palette.background)),
        gauge,
    );
}
