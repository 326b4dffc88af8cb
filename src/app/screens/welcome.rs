//! Welcome screen implementation
//!
//! Greeting with a start button. The placement quiz starts on its own once
//! the configured delay has passed.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::time::Instant;

use super::components::{render_button, render_help};
use crate::app::state::{FlowEvent, NavigationAction};

/// Welcome screen with an auto-start deadline
#[derive(Debug, Clone)]
pub struct WelcomeScreen {
    start_at: Instant,
}

impl WelcomeScreen {
    /// Create a welcome screen that starts by itself `delay` after `now`
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            start_at: now + delay,
        }
    }

    /// Time left before the automatic start
    pub fn remaining(&self, now: Instant) -> Duration {
        self.start_at.saturating_duration_since(now)
    }

    pub fn deadline(&self) -> Option<Instant> {
        Some(self.start_at)
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<FlowEvent> {
        match action {
            NavigationAction::Select => Some(FlowEvent::Start),
            _ => None,
        }
    }

    pub fn tick(&mut self, now: Instant) -> Option<FlowEvent> {
        if now >= self.start_at {
            Some(FlowEvent::Start)
        } else {
            None
        }
    }

    /// Render the welcome screen
    pub fn render(&mut self, f: &mut Frame, now: Instant) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Greeting
                Constraint::Length(3), // Start button
                Constraint::Length(2), // Countdown
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_greeting(f, chunks[0]);

        let button_area = centered(chunks[1], 24);
        render_button(f, button_area, "Start now", Color::Cyan, true);

        let seconds = self.remaining(now).as_secs_f64().ceil() as u64;
        let countdown = Paragraph::new(format!("Starting in {}s", seconds))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(countdown, chunks[2]);

        render_help(f, chunks[3], &[("Enter", "Start"), ("Esc", "Quit")]);
    }

    fn render_greeting(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "QUIZFLOW",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Welcome!",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from("A short placement quiz, one lesson and a practice round."),
        ];

        let greeting = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(greeting, area);
    }
}

/// Horizontally centered slice of `area`, `width` columns wide
pub(super) fn centered(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}
