//! Level-up screen implementation
//!
//! Celebrates the end of the placement quiz and shows the placement level.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_button, render_help};
use super::welcome::centered;
use crate::app::state::{FlowEvent, NavigationAction};

const TROPHY: [&str; 5] = [
    r"  ___________  ",
    r" '._==_==_=_.' ",
    r"   \:     :/   ",
    r"    '.   .'    ",
    r"     _] [_     ",
];

/// Level-up screen
#[derive(Debug, Clone)]
pub struct LevelUpScreen {
    level: u32,
    score: u32,
    question_count: usize,
}

impl LevelUpScreen {
    pub fn new(level: u32, score: u32, question_count: usize) -> Self {
        Self {
            level,
            score,
            question_count,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<FlowEvent> {
        match action {
            NavigationAction::Select => Some(FlowEvent::Continue),
            _ => None,
        }
    }

    /// Render the level-up screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),   // Trophy and level
                Constraint::Length(3), // Continue button
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let mut text: Vec<Line> = vec![Line::from("")];
        text.extend(TROPHY.iter().map(|row| {
            Line::from(Span::styled(*row, Style::default().fg(Color::Yellow)))
        }));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Excellent!",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(Span::styled(
            format!("You are at level {}", self.level),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(Span::styled(
            format!("Placement: {} of {} correct", self.score, self.question_count),
            Style::default().fg(Color::DarkGray),
        )));

        let body = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(body, chunks[0]);

        render_button(f, centered(chunks[1], 24), "Continue", Color::Cyan, true);
        render_help(f, chunks[2], &[("Enter", "Continue"), ("Q", "Quit")]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue() {
        let mut screen = LevelUpScreen::new(3, 3, 3);
        assert_eq!(screen.level(), 3);
        assert_eq!(screen.handle(NavigationAction::Up), None);
        assert_eq!(screen.handle(NavigationAction::Select), Some(FlowEvent::Continue));
    }
}
