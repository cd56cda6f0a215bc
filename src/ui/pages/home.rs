use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let typed = app
        .typewriter
        .as_ref()
        .map(|typewriter| typewriter.text())
        .unwrap_or_default();
    let cursor = if app.tick_count / 30 % 2 == 0 { "▌" } else { " " };

    let lines = vec![
        Line::from(Span::styled("Hello, I'm", palette.muted())),
        Line::from(Span::styled(app.config.github_user.clone(), palette.heading())),
        Line::from(vec![
            Span::styled(typed.to_string(), palette.text()),
            Span::styled(cursor, palette.text()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "I build fast, accessible software for the web and the terminal.",
            palette.muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", palette.heading()),
            Span::styled(" View My Work    ", palette.text()),
            Span::styled("[c]", palette.heading()),
            Span::styled(" Get In Touch", palette.text()),
        ]),
    ];

    let [column] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(area);
    let [hero] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(column);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), hero);
}
