//! Result screen implementation
//!
//! Summarizes the practice quiz: experience earned, accuracy and the time
//! the lesson was finished.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::components::{render_button, render_help, render_title};
use super::welcome::centered;
use crate::app::state::{FlowEvent, NavigationAction};
use crate::models::{ResultMetrics, SessionScores};

/// Result screen component that displays the lesson summary
#[derive(Debug, Clone)]
pub struct ResultsScreen {
    metrics: ResultMetrics,
    scores: SessionScores,
    practice_count: usize,
    finished_at: DateTime<Local>,
}

impl ResultsScreen {
    /// Create the result screen from the accumulated scores
    pub fn new(scores: SessionScores, practice_count: usize, finished_at: DateTime<Local>) -> Self {
        Self {
            metrics: ResultMetrics::from_practice(scores.practice, practice_count as u32),
            scores,
            practice_count,
            finished_at,
        }
    }

    pub fn metrics(&self) -> &ResultMetrics {
        &self.metrics
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<FlowEvent> {
        match action {
            NavigationAction::Select => Some(FlowEvent::Finish),
            _ => None,
        }
    }

    /// Render the result screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Metric tiles
                Constraint::Min(6),    // Details table
                Constraint::Length(3), // Finish button
                Constraint::Length(3), // Help text
            ])
            .split(size);

        render_title(f, chunks[0], "Lesson complete!", Color::Cyan);
        self.render_tiles(f, chunks[1]);
        self.render_details(f, chunks[2]);
        render_button(f, centered(chunks[3], 24), "Finish", Color::Cyan, true);
        render_help(f, chunks[4], &[("Enter", "Finish"), ("Q", "Quit")]);
    }

    /// Render the experience and accuracy tiles
    fn render_tiles(&self, f: &mut Frame, area: Rect) {
        let tiles_area = centered(area, 44);
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(tiles_area);

        let tile = |label: &str, value: String, color: Color| {
            Paragraph::new(vec![
                Line::from(Span::styled(label.to_string(), Style::default().fg(color))),
                Line::from(Span::styled(
                    value,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
        };

        f.render_widget(
            tile("Experience", format!("★ {}", self.metrics.experience), Color::Yellow),
            tiles[0],
        );
        f.render_widget(
            tile("Accuracy", format!("{}%", self.metrics.accuracy), Color::Green),
            tiles[1],
        );
    }

    /// Render the detail table
    fn render_details(&self, f: &mut Frame, area: Rect) {
        let practice_str = format!("{} / {}", self.scores.practice, self.practice_count);
        let placement_str = format!("{}", self.scores.placement);
        let finished_str = self.finished_at.format("%Y-%m-%d %H:%M:%S").to_string();

        let rows = vec![
            Row::new(vec!["Practice correct:", practice_str.as_str()]),
            Row::new(vec!["Placement score:", placement_str.as_str()]),
            Row::new(vec!["Finished at:", finished_str.as_str()]),
        ];

        let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(20)])
            .block(
                Block::default()
                    .title("Details")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .column_spacing(2);

        f.render_widget(table, area);
    }
}
