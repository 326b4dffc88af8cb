//! Lesson card screen implementation
//!
//! Shows the lesson title and its paragraphs; the first paragraph is the
//! lead. Long lessons scroll.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_button, render_help, render_title};
use super::welcome::centered;
use crate::app::state::{FlowEvent, NavigationAction};
use crate::models::Lesson;

/// Lesson card screen
#[derive(Debug, Clone)]
pub struct LessonScreen {
    lesson: Lesson,
    scroll: u16,
}

impl LessonScreen {
    pub fn new(lesson: Lesson) -> Self {
        Self { lesson, scroll: 0 }
    }

    /// Lines scrolled past
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<FlowEvent> {
        match action {
            NavigationAction::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            NavigationAction::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                None
            }
            NavigationAction::Select => Some(FlowEvent::BeginPractice),
            _ => None,
        }
    }

    // One blank line separates paragraphs; wrapping may add more lines,
    // which the paragraph widget clips.
    fn max_scroll(&self) -> u16 {
        (self.lesson.body.len() * 2) as u16
    }

    /// Render the lesson screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Card
                Constraint::Length(3), // Practice button
                Constraint::Length(3), // Help text
            ])
            .split(size);

        render_title(f, chunks[0], &self.lesson.title, Color::Cyan);

        let lead_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let rest_style = Style::default().fg(Color::Gray);

        let mut text = Vec::with_capacity(self.lesson.body.len() * 2);
        if let Some(lead) = self.lesson.lead() {
            text.push(Line::from(Span::styled(lead.to_string(), lead_style)));
            text.push(Line::from(""));
        }
        for paragraph in self.lesson.body.iter().skip(1) {
            text.push(Line::from(Span::styled(paragraph.clone(), rest_style)));
            text.push(Line::from(""));
        }

        let card = Paragraph::new(text)
            .alignment(Alignment::Right)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Lesson")
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(card, chunks[1]);

        render_button(f, centered(chunks[2], 24), "Let's practice", Color::Cyan, true);
        render_help(f, chunks[3], &[("↑↓", "Scroll"), ("Enter", "Practice"), ("Q", "Quit")]);
    }
}
