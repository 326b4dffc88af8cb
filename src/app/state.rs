//! Application state management
//!
//! The screen sequencer: one stage active at a time, one legal event per
//! stage, and keyboard mapping into navigation actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::SessionScores;

/// Application screens, in the order the learner meets them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Greeting; starts the placement quiz on its own after a delay
    #[default]
    Welcome,
    /// Placement quiz with immediate feedback
    Placement,
    /// Level-up celebration
    LevelUp,
    /// Lesson card
    Lesson,
    /// Practice quiz with explicit checking
    Practice,
    /// Experience and accuracy summary
    Result,
}

impl Stage {
    /// Display name of the stage
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome",
            Stage::Placement => "Placement",
            Stage::LevelUp => "Level Up",
            Stage::Lesson => "Lesson",
            Stage::Practice => "Practice",
            Stage::Result => "Result",
        }
    }
}

/// Completion events raised by the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Welcome finished, by timeout or explicitly
    Start,
    /// Placement quiz finished with this score
    PlacementCompleted(u32),
    /// Level-up acknowledged
    Continue,
    /// Lesson read, practice requested
    BeginPractice,
    /// Practice quiz finished with this score
    PracticeCompleted(u32),
    /// Result acknowledged
    Finish,
}

/// Sequencer state: the active stage plus scores carried between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub stage: Stage,
    pub scores: SessionScores,
}

impl AppState {
    /// Next state for `event`, or `None` if the event is not legal here
    ///
    /// Each stage accepts exactly one event. Finishing resets the scores.
    pub fn transition(&self, event: FlowEvent) -> Option<AppState> {
        let scores = self.scores;
        let next = match (self.stage, event) {
            (Stage::Welcome, FlowEvent::Start) => AppState {
                stage: Stage::Placement,
                scores,
            },
            (Stage::Placement, FlowEvent::PlacementCompleted(score)) => AppState {
                stage: Stage::LevelUp,
                scores: SessionScores { placement: score, ..scores },
            },
            (Stage::LevelUp, FlowEvent::Continue) => AppState {
                stage: Stage::Lesson,
                scores,
            },
            (Stage::Lesson, FlowEvent::BeginPractice) => AppState {
                stage: Stage::Practice,
                scores,
            },
            (Stage::Practice, FlowEvent::PracticeCompleted(score)) => AppState {
                stage: Stage::Result,
                scores: SessionScores { practice: score, ..scores },
            },
            (Stage::Result, FlowEvent::Finish) => AppState::default(),
            _ => return None,
        };
        Some(next)
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move the cursor up (arrow up, k)
    Up,
    /// Move the cursor down (arrow down, j)
    Down,
    /// Pick the highlighted option (Space)
    Pick,
    /// Pick option N, zero-based (digit keys 1-9)
    Choose(usize),
    /// Primary action of the screen (Enter)
    Select,
    /// Go back/cancel (Esc)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Owner of the sequencer state
#[derive(Debug, Default)]
pub struct Sequencer {
    state: AppState,
    should_quit: bool,
}

impl Sequencer {
    /// Create a new sequencer starting at the welcome screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the active stage
    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn scores(&self) -> SessionScores {
        self.state.scores
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a completion event; returns whether the stage changed
    pub fn apply(&mut self, event: FlowEvent) -> bool {
        match self.state.transition(event) {
            Some(next) => {
                self.commit(next, event);
                true
            }
            None => {
                log::debug!("ignored {:?} in {}", event, self.state.stage.title());
                false
            }
        }
    }

    /// Apply a completion event, building the next stage's companion first
    ///
    /// `enter` sees the next state before it is committed. If it fails the
    /// sequencer keeps its current state and the error is returned.
    pub fn apply_with<T, E>(
        &mut self,
        event: FlowEvent,
        enter: impl FnOnce(&AppState) -> std::result::Result<T, E>,
    ) -> std::result::Result<Option<T>, E> {
        let next = match self.state.transition(event) {
            Some(next) => next,
            None => {
                log::debug!("ignored {:?} in {}", event, self.state.stage.title());
                return Ok(None);
            }
        };
        let entered = enter(&next)?;
        self.commit(next, event);
        Ok(Some(entered))
    }

    fn commit(&mut self, next: AppState, event: FlowEvent) {
        log::info!("{} -> {} on {:?}", self.state.stage.title(), next.stage.title(), event);
        self.state = next;
    }

    /// Handle actions every screen shares; returns true if consumed
    pub fn handle_global(&mut self, action: NavigationAction) -> bool {
        match action {
            NavigationAction::Quit => {
                self.quit();
                true
            }
            NavigationAction::Back if self.state.stage == Stage::Welcome => {
                self.quit();
                true
            }
            // There is no way back; the flow only moves forward
            NavigationAction::Back => true,
            _ => false,
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,

            // Option picking
            KeyCode::Char(' ') => NavigationAction::Pick,
            KeyCode::Char(c @ '1'..='9') => NavigationAction::Choose(c as usize - '1' as usize),

            // Selection and confirmation
            KeyCode::Enter => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}
