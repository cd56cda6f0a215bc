//! Display lines for the stats panel and the project cards.
//!
//! Everything here is a pure function of a [`LoadState`] plus animation
//! progress, so the same state always renders the same lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::projects::{Project, ProjectFilter};
use super::stats::GitHubStats;
use super::LoadState;
use crate::error::ErrorCategory;
use crate::ui::theme::Palette;

/// Key that re-runs a failed load.
pub const RETRY_KEY: char = 'r';

const SKELETON_ITEMS: usize = 4;
const SKELETON_BAR: &str = "░░░░░░░░░░░░";
const SKELETON_SHORT: &str = "░░░░░░";

/// Lines for the about-page stats panel.
///
/// `counter_progress` (0.0..=1.0) scales the animated counters.
pub fn stats_lines(
    state: &LoadState<GitHubStats>,
    counter_progress: f64,
    palette: &Palette,
) -> Vec<Line<'static>> {
    match state {
        LoadState::Idle | LoadState::Loading => skeleton_lines(SKELETON_ITEMS, palette),
        LoadState::Failed(category) => error_lines("Unable to load GitHub stats", *category, palette),
        LoadState::Loaded(stats) => loaded_stats_lines(stats, counter_progress, palette),
    }
}

fn loaded_stats_lines(stats: &GitHubStats, progress: f64, palette: &Palette) -> Vec<Line<'static>> {
    let counters = [
        (stats.public_repos as u64, "Public Repositories"),
        (stats.total_stars, "Total Stars"),
        (stats.total_forks, "Total Forks"),
        (stats.followers, "Followers"),
        (stats.following, "Following"),
    ];

    let mut lines: Vec<Line<'static>> = counters
        .iter()
        .map(|(target, label)| stat_line(animated_count(*target, progress).to_string(), label, palette))
        .collect();

    lines.push(stat_line(stats.join_year.to_string(), "Member Since", palette));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Top Languages", palette.muted())));

    let mut tags: Vec<Span<'static>> = Vec::new();
    for language in &stats.top_languages {
        tags.push(Span::styled(
            format!(" {} ({}) ", language.name, language.count),
            Style::default().fg(palette.foreground).add_modifier(Modifier::REVERSED),
        ));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));
    lines
}

fn stat_line(value: String, label: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", value), palette.heading()),
        Span::raw("  "),
        Span::styled(label.to_string(), palette.muted()),
    ])
}

/// Counter value shown at `progress` of its animation.
pub fn animated_count(target: u64, progress: f64) -> u64 {
    (target as f64 * progress.clamp(0.0, 1.0)).floor() as u64
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Lines for one project card whose inner width is `width` columns.
pub fn project_card_lines(project: &Project, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let description = project
        .description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());

    let tech: Vec<Span<'static>> = project
        .languages
        .iter()
        .flat_map(|lang| {
            [
                Span::styled(
                    format!(" {} ", lang),
                    Style::default().fg(palette.foreground).add_modifier(Modifier::REVERSED),
                ),
                Span::raw(" "),
            ]
        })
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&project.name, width),
            palette.heading(),
        )),
        Line::from(Span::styled(description, palette.text())),
        Line::from(tech),
        Line::from(vec![
            Span::styled(format!("★ {}", project.stars), palette.muted()),
            Span::raw("   "),
            Span::styled(format!("⑂ {}", project.forks), palette.muted()),
        ]),
        Line::from(Span::styled(truncate_to_width(&format!("code  {}", project.html_url), width), palette.muted())),
    ];
    if let Some(homepage) = &project.homepage {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("demo  {}", homepage), width),
            palette.muted(),
        )));
    }
    lines
}

/// Placeholder lines while projects load.
pub fn projects_loading_lines(palette: &Palette) -> Vec<Line<'static>> {
    skeleton_lines(3, palette)
}

/// Error placeholder for the projects grid.
pub fn projects_error_lines(category: ErrorCategory, palette: &Palette) -> Vec<Line<'static>> {
    error_lines("Unable to load projects", category, palette)
}

/// Projects passing `filter`, in their featured order.
pub fn visible_projects<'a>(projects: &'a [Project], filter: ProjectFilter) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

fn skeleton_lines(items: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(items * 3);
    for _ in 0..items {
        lines.push(Line::from(Span::styled(SKELETON_BAR, palette.muted())));
        lines.push(Line::from(Span::styled(SKELETON_SHORT, palette.muted())));
        lines.push(Line::from(""));
    }
    lines
}

/// Title, the category's hint, and a retry control only when retrying can help.
fn error_lines(title: &str, category: ErrorCategory, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("⚠ {}", title),
            palette.error_text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(category.recovery_hint(), palette.muted())),
    ];
    if category.is_retryable() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("[{}]", RETRY_KEY), palette.heading()),
            Span::styled(" Retry", palette.text()),
        ]));
    }
    lines
}
