//! Color palettes and span styles for the showcase.
//!
//! Dark palette is Kanagawa Wave; light is a paper-toned counterpart. The
//! resolved theme picks the palette; nothing else in the render path looks at
//! the preference.

use ratatui::style::{Color, Modifier, Style};
use vitrine_types::{ResolvedTheme, SpanRole, ThemeState};

/// Resolved color palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub cursor: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(22, 22, 29),          // sumiInk0
            bg_panel: Color::Rgb(31, 31, 40),    // sumiInk3
            border: Color::Rgb(84, 84, 109),     // sumiInk6
            text: Color::Rgb(220, 215, 186),     // fujiWhite
            text_muted: Color::Rgb(114, 113, 105), // fujiGray
            primary: Color::Rgb(149, 127, 184),  // oniViolet
            accent: Color::Rgb(127, 180, 202),   // springBlue
            success: Color::Rgb(152, 187, 108),  // springGreen
            warning: Color::Rgb(230, 195, 132),  // carpYellow
            cursor: Color::Rgb(220, 215, 186),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(245, 242, 232),
            bg_panel: Color::Rgb(235, 231, 219),
            border: Color::Rgb(168, 162, 144),
            text: Color::Rgb(42, 42, 55),
            text_muted: Color::Rgb(128, 122, 108),
            primary: Color::Rgb(98, 70, 154),
            accent: Color::Rgb(44, 106, 140),
            success: Color::Rgb(80, 120, 40),
            warning: Color::Rgb(160, 120, 30),
            cursor: Color::Rgb(42, 42, 55),
        }
    }
}

/// Select the palette for a resolved theme state.
#[must_use]
pub fn palette(theme: ThemeState) -> Palette {
    match theme.resolved {
        ResolvedTheme::Dark => Palette::dark(),
        ResolvedTheme::Light => Palette::light(),
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, SpanRole, Style};

    /// Map a scenario span role to its style.
    #[must_use]
    pub fn span(role: SpanRole, palette: &Palette) -> Style {
        match role {
            SpanRole::Plain => Style::default().fg(palette.text),
            SpanRole::Muted => Style::default().fg(palette.text_muted),
            SpanRole::Prompt => Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
            SpanRole::Agent => Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            SpanRole::Accent => Style::default().fg(palette.accent),
            SpanRole::Tool => Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
            SpanRole::ToolArg => Style::default().fg(palette.text_muted),
            SpanRole::Success => Style::default().fg(palette.success),
        }
    }

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn copied_badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }
}
