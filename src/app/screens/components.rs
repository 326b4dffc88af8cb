//! Shared screen components
//!
//! Title bar, key-hint bar and buttons drawn the same way on every screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bold, bordered title bar
pub fn render_title(f: &mut Frame, area: Rect, title: &str, color: Color) {
    let title = Paragraph::new(title.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(title, area);
}

/// Key hints such as `Enter Continue  Q Quit`
pub fn render_help(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, (key, label)) in keys.iter().enumerate() {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        let sep = if i + 1 < keys.len() { "  " } else { "" };
        spans.push(Span::raw(format!(" {}{}", label, sep)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

/// A single action button; disabled buttons are dimmed
pub fn render_button(f: &mut Frame, area: Rect, label: &str, color: Color, enabled: bool) {
    let (style, border) = if enabled {
        (
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
            Style::default().fg(color),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(button, area);
}
