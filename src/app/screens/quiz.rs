//! Quiz screen implementation
//!
//! Shared by the placement and practice stages. Displays the progress bar,
//! the current prompt, the options with their revealed state and a footer
//! whose content depends on the answer flow.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tokio::time::Instant;

use super::components::{render_button, render_help, render_title};
use crate::app::state::{FlowEvent, NavigationAction};
use crate::engine::{
    AnswerFlow, ExplicitCheck, Feedback, ImmediateFeedback, Quiz, QuizInput, QuizSession, QuizStep,
};
use crate::util::format::progress_percent;

/// Display policy of an answer flow
pub trait FlowView: AnswerFlow {
    /// Whether the live streak counter is shown
    const SHOWS_STREAK: bool;

    /// Label of the footer button, if the flow has one
    fn button_label(&self, session: &QuizSession) -> Option<&'static str>;

    /// Line shown under the options before the answer is revealed
    fn prompt_hint(&self) -> &'static str;
}

impl FlowView for ImmediateFeedback {
    const SHOWS_STREAK: bool = false;

    fn button_label(&self, _session: &QuizSession) -> Option<&'static str> {
        None
    }

    fn prompt_hint(&self) -> &'static str {
        "Pick an answer"
    }
}

impl FlowView for ExplicitCheck {
    const SHOWS_STREAK: bool = true;

    fn button_label(&self, session: &QuizSession) -> Option<&'static str> {
        if session.is_answered() {
            Some("Continue")
        } else {
            Some("Check")
        }
    }

    fn prompt_hint(&self) -> &'static str {
        "Pick an answer, then check it"
    }
}

/// Quiz screen driving one [`Quiz`]
#[derive(Debug)]
pub struct QuizScreen<F: FlowView> {
    title: &'static str,
    quiz: Quiz<F>,
    cursor: usize,
    list_state: ListState,
    on_complete: fn(u32) -> FlowEvent,
}

impl<F: FlowView> QuizScreen<F> {
    /// Create a quiz screen; `on_complete` turns the final score into the stage's completion event
    pub fn new(title: &'static str, quiz: Quiz<F>, on_complete: fn(u32) -> FlowEvent) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            title,
            quiz,
            cursor: 0,
            list_state,
            on_complete,
        }
    }

    pub fn quiz(&self) -> &Quiz<F> {
        &self.quiz
    }

    /// Highlighted option
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.quiz.deadline()
    }

    /// Apply a navigation action
    pub fn handle(&mut self, action: NavigationAction, now: Instant) -> Option<FlowEvent> {
        let input = match action {
            NavigationAction::Up => {
                self.move_cursor(false);
                return None;
            }
            NavigationAction::Down => {
                self.move_cursor(true);
                return None;
            }
            NavigationAction::Choose(option) => QuizInput::Select(option),
            NavigationAction::Pick => QuizInput::Select(self.cursor),
            NavigationAction::Select => self.quiz.primary_input(self.cursor)?,
            _ => return None,
        };

        let index = self.quiz.session().index();
        let step = self.quiz.handle(input, now);
        if let (QuizInput::Select(option), QuizStep::Updated) = (input, step) {
            self.set_cursor(option);
        }
        self.after_step(step, index)
    }

    /// Fire any due timer
    pub fn tick(&mut self, now: Instant) -> Option<FlowEvent> {
        let index = self.quiz.session().index();
        let step = self.quiz.tick(now);
        self.after_step(step, index)
    }

    fn after_step(&mut self, step: QuizStep, index_before: usize) -> Option<FlowEvent> {
        match step {
            QuizStep::Completed(score) => Some((self.on_complete)(score)),
            QuizStep::Updated if self.quiz.session().index() != index_before => {
                self.set_cursor(0);
                None
            }
            _ => None,
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let session = self.quiz.session();
        if session.is_answered() {
            return;
        }
        let count = session.current().options.len();
        if count == 0 {
            return;
        }
        let next = if down {
            (self.cursor + 1) % count
        } else if self.cursor == 0 {
            count - 1
        } else {
            self.cursor - 1
        };
        self.set_cursor(next);
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.list_state.select(Some(cursor));
    }

    /// Render the quiz screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Progress bar
                Constraint::Length(4), // Prompt
                Constraint::Min(6),    // Options
                Constraint::Length(5), // Feedback / footer
                Constraint::Length(3), // Help text
            ])
            .split(size);

        render_title(f, chunks[0], &self.title_text(), Color::Cyan);
        self.render_progress_bar(f, chunks[1]);
        self.render_prompt(f, chunks[2]);
        self.render_options(f, chunks[3]);
        self.render_footer(f, chunks[4]);
        self.render_help(f, chunks[5]);
    }

    fn title_text(&self) -> String {
        if F::SHOWS_STREAK {
            let session = self.quiz.session();
            format!(
                "{}  |  Streak: {} (best {})",
                self.title,
                session.streak(),
                session.best_streak()
            )
        } else {
            self.title.to_string()
        }
    }

    /// Render the progress bar
    fn render_progress_bar(&self, f: &mut Frame, area: Rect) {
        let session = self.quiz.session();
        let label = format!("Question {} of {}", session.index() + 1, session.len());

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(progress_percent(session.progress()))
            .label(label);

        f.render_widget(gauge, area);
    }

    fn render_prompt(&self, f: &mut Frame, area: Rect) {
        let prompt = Paragraph::new(self.quiz.session().current().prompt.clone())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(prompt, area);
    }

    fn render_options(&mut self, f: &mut Frame, area: Rect) {
        let session = self.quiz.session();
        let question = session.current();
        let answered = session.is_answered();

        let items: Vec<ListItem> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let is_selected = session.selected() == Some(i);
                let is_correct = question.is_correct(option);

                let (marker, style) = if answered && is_correct {
                    (" ✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                } else if answered && is_selected {
                    (" ✗", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                } else if is_selected {
                    ("", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
                } else {
                    ("", Style::default().fg(Color::White))
                };

                ListItem::new(format!("{}. {}{}", i + 1, option, marker)).style(style)
            })
            .collect();

        let highlight = if answered {
            Style::default()
        } else {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Options"))
            .highlight_style(highlight)
            .highlight_symbol(if answered { "   " } else { ">> " });

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Render feedback, and the footer button when the flow has one
    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let session = self.quiz.session();
        let flow = self.quiz.flow();

        let text_area = match flow.button_label(session) {
            Some(label) => {
                let parts = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(20), Constraint::Length(16)])
                    .split(area);
                let color = match session.feedback() {
                    Some(Feedback::Correct) => Color::Green,
                    Some(Feedback::Incorrect) => Color::Red,
                    None => Color::Cyan,
                };
                let enabled = self.quiz.primary_input(self.cursor).is_some();
                render_button(f, parts[1], label, color, enabled);
                parts[0]
            }
            None => area,
        };

        let (lines, color) = match session.feedback() {
            Some(Feedback::Correct) => (
                vec![Line::from(Span::styled(
                    "Great!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ))],
                Color::Green,
            ),
            Some(Feedback::Incorrect) => (
                vec![
                    Line::from(Span::styled(
                        "Wrong answer",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("Correct answer: {}", session.current().correct),
                        Style::default().fg(Color::Red),
                    )),
                ],
                Color::Red,
            ),
            None => (vec![Line::from(flow.prompt_hint())], Color::White),
        };

        let feedback = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
        f.render_widget(feedback, text_area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let keys: &[(&str, &str)] = if self.quiz.session().is_answered() {
            match self.quiz.flow().button_label(self.quiz.session()) {
                Some(_) => &[("Enter", "Continue"), ("Q", "Quit")],
                None => &[("Q", "Quit")],
            }
        } else {
            &[("↑↓", "Navigate"), ("Space/1-4", "Pick"), ("Enter", "Confirm"), ("Q", "Quit")]
        };
        render_help(f, area, keys);
    }
}
