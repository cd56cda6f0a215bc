use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::contact::{AlertKind, FieldName, FormFocus};
use crate::ui::theme::Palette;

fn field_height(name: FieldName) -> u16 {
    if name.is_multiline() {
        6
    } else {
        3
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [info, form] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(area);

    let info_lines = vec![
        Line::styled("Let's work together", palette.heading()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email   ", palette.muted()),
            Span::styled(app.config.contact_email.clone(), palette.text()),
        ]),
        Line::from(vec![
            Span::styled("GitHub  ", palette.muted()),
            Span::styled(
                format!("github.com/{}", app.config.github_user),
                palette.text(),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(info_lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Contact ").border_style(palette.muted())),
        info,
    );

    let form_state = &app.contact;
    let mut constraints = vec![Constraint::Length(1)];
    for name in FieldName::ALL {
        constraints.push(Constraint::Length(field_height(name)));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(form);

    if let Some(alert) = form_state.alert() {
        let style = match alert.kind {
            AlertKind::Success => palette.text().fg(palette.success),
            AlertKind::Error => palette.error_text(),
        };
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("{} {}", alert.kind.icon(), alert.message),
                style,
            )),
            rows[0],
        );
    }

    for (i, name) in FieldName::ALL.into_iter().enumerate() {
        let field = form_state.field(name);
        let focused = form_state.focus() == FormFocus::Field(name);
        let border = if field.has_error() {
            palette.error_text()
        } else if focused {
            palette.heading()
        } else {
            palette.muted()
        };
        let mut text = field.value.clone();
        if focused {
            text.push('▌');
        }
        frame.render_widget(
            Paragraph::new(text)
                .style(palette.text())
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .title(format!(" {} ", name.label()))
                        .border_style(border),
                ),
            rows[1 + i * 2],
        );
        // the `{field}-error` line
        frame.render_widget(
            Paragraph::new(Line::styled(field.error.clone(), palette.error_text())),
            rows[2 + i * 2],
        );
    }

    let label = if form_state.is_submitting() {
        "[ Sending... ]"
    } else {
        "[ Send Message ]"
    };
    let style = if form_state.focus() == FormFocus::Submit {
        palette.heading().add_modifier(Modifier::REVERSED)
    } else {
        palette.heading()
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), rows[1 + FieldName::ALL.len() * 2]);
}
