//! Color palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::Theme;

/// Colors used across every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub dim: Color,
    /// Navigation bar fill once the page is scrolled.
    pub surface: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub overlay: Color,
    pub bubble: Color,
    pub particle: Color,
}

// ============================================================================
// Light theme
// ============================================================================

const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    foreground: Color::Rgb(20, 20, 20),
    dim: Color::Rgb(110, 110, 110),
    surface: Color::Rgb(238, 238, 238),
    accent: Color::Rgb(0, 0, 0),
    border: Color::Rgb(200, 200, 200),
    error: Color::Rgb(231, 76, 60), // #e74c3c
    success: Color::Rgb(4, 181, 117),
    overlay: Color::Rgb(20, 20, 20),
    bubble: Color::Rgb(215, 215, 215),
    particle: Color::Rgb(190, 190, 190),
};

// ============================================================================
// Dark theme
// ============================================================================

const DARK: Palette = Palette {
    background: Color::Rgb(10, 10, 10),
    foreground: Color::Rgb(235, 235, 235),
    dim: Color::DarkGray,
    surface: Color::Rgb(28, 28, 28),
    accent: Color::White,
    border: Color::DarkGray,
    error: Color::Rgb(231, 76, 60),
    success: Color::Rgb(4, 181, 117),
    overlay: Color::Rgb(235, 235, 235),
    bubble: Color::Rgb(45, 45, 45),
    particle: Color::Rgb(70, 70, 70),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.error, dark.error);
    }
}
