//! TUI application module
//!
//! Contains the terminal user interface, the screen per stage, and the
//! sequencer that moves between them.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, FlowController};
pub use screens::{LessonScreen, LevelUpScreen, QuizScreen, ResultsScreen, Screen, WelcomeScreen};
pub use state::{AppState, FlowEvent, NavigationAction, Sequencer, Stage};
pub use tui::{Tui, TuiEvent};
