//! Navigation bar.
//!
//! Once the page body is scrolled the bar takes a filled surface and a
//! stronger rule so it stands apart from the content beneath it.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use super::theme::Palette;
use crate::router::{PageId, RouterSnapshot};
use crate::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &RouterSnapshot,
    theme: Theme,
    scrolled: bool,
    palette: &Palette,
) {
    let block = Block::default().borders(Borders::BOTTOM);
    let block = if scrolled {
        block
            .style(Style::default().bg(palette.surface))
            .border_style(palette.heading())
    } else {
        block.border_style(palette.muted())
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand, tabs, toggle] = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Min(0),
        Constraint::Length(4),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(" folio", palette.heading())),
        brand,
    );

    let titles: Vec<Line> = PageId::ALL
        .iter()
        .map(|page| Line::from(format!("{} {}", page.hotkey(), page.title())))
        .collect();
    let selected = PageId::ALL
        .iter()
        .position(|page| *page == snapshot.nav_highlight)
        .unwrap_or_default();
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(palette.muted())
            .highlight_style(palette.heading().add_modifier(Modifier::UNDERLINED))
            .divider(" "),
        tabs,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(theme.toggle_icon(), palette.text())),
        toggle,
    );
}
