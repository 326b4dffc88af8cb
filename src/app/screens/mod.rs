//! TUI screen components
//!
//! One screen type per stage, gathered in the [`Screen`] union. A screen
//! owns only its local interaction state and reports completion with a
//! [`FlowEvent`]; timers live inside the screen and die with it.

pub mod components;
pub mod lesson;
pub mod levelup;
pub mod quiz;
pub mod results;
pub mod welcome;

pub use lesson::LessonScreen;
pub use levelup::LevelUpScreen;
pub use quiz::{FlowView, QuizScreen};
pub use results::ResultsScreen;
pub use welcome::WelcomeScreen;

use chrono::Local;
use ratatui::Frame;
use tokio::time::Instant;

use crate::app::state::{AppState, FlowEvent, NavigationAction, Stage};
use crate::config::FlowConfig;
use crate::content::ContentPack;
use crate::engine::{ExplicitCheck, ImmediateFeedback, Quiz};
use crate::Result;

/// The active screen and its local state
#[derive(Debug)]
pub enum Screen {
    Welcome(WelcomeScreen),
    Placement(QuizScreen<ImmediateFeedback>),
    LevelUp(LevelUpScreen),
    Lesson(LessonScreen),
    Practice(QuizScreen<ExplicitCheck>),
    Result(ResultsScreen),
}

impl Screen {
    /// Build the screen for `state`'s stage
    pub fn enter(state: &AppState, content: &ContentPack, config: &FlowConfig, now: Instant) -> Result<Self> {
        let screen = match state.stage {
            Stage::Welcome => Screen::Welcome(WelcomeScreen::new(now, config.welcome_delay)),
            Stage::Placement => {
                let quiz = Quiz::new(
                    content.placement_questions(),
                    ImmediateFeedback::new(config.feedback_delay),
                )?;
                Screen::Placement(QuizScreen::new("Placement", quiz, FlowEvent::PlacementCompleted))
            }
            Stage::LevelUp => Screen::LevelUp(LevelUpScreen::new(
                state.scores.placement_level(),
                state.scores.placement,
                content.placement.len(),
            )),
            Stage::Lesson => Screen::Lesson(LessonScreen::new(content.lesson.clone())),
            Stage::Practice => {
                let quiz = Quiz::new(content.practice_questions(), ExplicitCheck)?;
                Screen::Practice(QuizScreen::new("Practice", quiz, FlowEvent::PracticeCompleted))
            }
            Stage::Result => Screen::Result(ResultsScreen::new(
                state.scores,
                content.practice.len(),
                Local::now(),
            )),
        };
        Ok(screen)
    }

    /// Stage this screen belongs to
    pub fn stage(&self) -> Stage {
        match self {
            Screen::Welcome(_) => Stage::Welcome,
            Screen::Placement(_) => Stage::Placement,
            Screen::LevelUp(_) => Stage::LevelUp,
            Screen::Lesson(_) => Stage::Lesson,
            Screen::Practice(_) => Stage::Practice,
            Screen::Result(_) => Stage::Result,
        }
    }

    /// Route a navigation action to the screen
    pub fn handle(&mut self, action: NavigationAction, now: Instant) -> Option<FlowEvent> {
        match self {
            Screen::Welcome(screen) => screen.handle(action),
            Screen::Placement(screen) => screen.handle(action, now),
            Screen::LevelUp(screen) => screen.handle(action),
            Screen::Lesson(screen) => screen.handle(action),
            Screen::Practice(screen) => screen.handle(action, now),
            Screen::Result(screen) => screen.handle(action),
        }
    }

    /// Fire the screen's timer if it is due
    pub fn tick(&mut self, now: Instant) -> Option<FlowEvent> {
        match self {
            Screen::Welcome(screen) => screen.tick(now),
            Screen::Placement(screen) => screen.tick(now),
            Screen::Practice(screen) => screen.tick(now),
            _ => None,
        }
    }

    /// Next instant at which `tick` has something to do
    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Screen::Welcome(screen) => screen.deadline(),
            Screen::Placement(screen) => screen.deadline(),
            Screen::Practice(screen) => screen.deadline(),
            _ => None,
        }
    }

    /// Render the screen
    pub fn render(&mut self, f: &mut Frame, now: Instant) {
        match self {
            Screen::Welcome(screen) => screen.render(f, now),
            Screen::Placement(screen) => screen.render(f),
            Screen::LevelUp(screen) => screen.render(f),
            Screen::Lesson(screen) => screen.render(f),
            Screen::Practice(screen) => screen.render(f),
            Screen::Result(screen) => screen.render(f),
        }
    }
}
