//! TUI rendering for Vitrine using ratatui.

mod theme;
mod view;

pub use theme::{Palette, palette, styles};
pub use view::{DemoViewState, SharedDemoView};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::CopyAction;
use vitrine_types::{ThemePreference, ThemeState};

pub const TITLE: &str = "driftwood";
pub const TAGLINE: &str = "An AI coding agent for your terminal";

/// Main draw function.
pub fn draw(
    frame: &mut Frame,
    view: &DemoViewState,
    preference: ThemePreference,
    theme: ThemeState,
    copy: &CopyAction,
) {
    let palette = palette(theme);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Hero header
            Constraint::Min(6),    // Terminal demo
            Constraint::Length(1), // Hint bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], &palette, copy);
    draw_demo(frame, chunks[1], &palette, view);
    draw_hint_bar(frame, chunks[2], &palette, preference, theme);
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette, copy: &CopyAction) {
    let mut install = vec![
        Span::styled("$ ", styles::key_hint(palette)),
        Span::styled(copy.text().to_owned(), Style::default().fg(palette.accent)),
    ];
    if copy.showing_feedback() {
        install.push(Span::styled("  copied ✓", styles::copied_badge(palette)));
    } else {
        install.push(Span::styled("  [c to copy]", styles::key_hint(palette)));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(TITLE, styles::title(palette)),
            Span::styled(
                format!("  {TAGLINE}"),
                Style::default().fg(palette.text_muted),
            ),
        ]),
        Line::from(install),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_demo(frame: &mut Frame, area: Rect, palette: &Palette, view: &DemoViewState) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(" demo ", styles::key_hint(palette)));

    let mut command_line = vec![
        Span::styled("$ ", Style::default().fg(palette.success)),
        Span::styled(view.typed.clone(), Style::default().fg(palette.text)),
    ];
    if view.cursor_visible {
        command_line.push(Span::styled("█", Style::default().fg(palette.cursor)));
    }

    let mut lines = vec![Line::from(command_line), Line::default()];
    for output_line in &view.output {
        let spans = output_line
            .spans()
            .iter()
            .map(|s| {
                let mut style = styles::span(s.role, palette);
                if !view.settled {
                    // Terminal cells can't tween opacity; dim until settled.
                    style = style.add_modifier(Modifier::DIM);
                }
                Span::styled(s.text.clone(), style)
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_hint_bar(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    preference: ThemePreference,
    theme: ThemeState,
) {
    let left = [("t", " theme  "), ("c", " copy  "), ("q", " quit")];
    let mut spans = Vec::new();
    let mut left_width = 0;
    for (key, label) in left {
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(label, styles::key_hint(palette)));
        left_width += key.width() + label.width();
    }

    let right = format!("theme: {}", theme_label(preference, theme));
    let pad = (area.width as usize).saturating_sub(left_width + right.width());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(right, styles::key_hint(palette)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Human-readable theme indicator, e.g. `auto (dark)` while auto-derived.
#[must_use]
pub fn theme_label(preference: ThemePreference, theme: ThemeState) -> String {
    if theme.auto_derived {
        format!("{} ({})", preference.as_str(), theme.resolved.as_str())
    } else {
        preference.as_str().to_owned()
    }
}
