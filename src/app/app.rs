//! Main application controller
//!
//! Manages the TUI, the sequencer and the active screen. The event loop
//! waits on whichever comes first: terminal input, the active screen's
//! timer, or the periodic redraw.

use std::future;
use std::io;
use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::{
    app::{
        screens::Screen,
        state::{AppState, FlowEvent, NavigationAction, Sequencer, Stage},
        tui::{Tui, TuiEvent},
    },
    config::FlowConfig,
    content::ContentPack,
    QuizFlowError, Result,
};

/// Redraw period, so countdowns stay current without input
const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

/// Sequencer plus active screen, independent of the terminal
#[derive(Debug)]
pub struct FlowController {
    sequencer: Sequencer,
    screen: Screen,
    content: ContentPack,
    config: FlowConfig,
}

impl FlowController {
    /// Start at the welcome screen
    ///
    /// The content pack is validated here, so later stages never see a
    /// question without options.
    pub fn new(content: ContentPack, config: FlowConfig, now: Instant) -> Result<Self> {
        content.validate()?;
        let sequencer = Sequencer::new();
        let screen = Screen::enter(sequencer.state(), &content, &config, now)?;
        Ok(Self {
            sequencer,
            screen,
            content,
            config,
        })
    }

    pub fn state(&self) -> &AppState {
        self.sequencer.state()
    }

    pub fn stage(&self) -> Stage {
        self.sequencer.stage()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.sequencer.should_quit()
    }

    /// Earliest instant the active screen wants a tick
    pub fn deadline(&self) -> Option<Instant> {
        self.screen.deadline()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        self.handle_action(Sequencer::key_to_navigation(key), now)
    }

    /// Handle a navigation action
    pub fn handle_action(&mut self, action: NavigationAction, now: Instant) -> Result<()> {
        if self.sequencer.handle_global(action) {
            return Ok(());
        }
        match self.screen.handle(action, now) {
            Some(event) => self.advance(event, now),
            None => Ok(()),
        }
    }

    /// Fire the active screen's timer if due
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        match self.screen.tick(now) {
            Some(event) => self.advance(event, now),
            None => Ok(()),
        }
    }

    /// Apply a completion event and swap in the next screen
    ///
    /// The old screen is dropped together with any timer it still had. If
    /// the next screen cannot be built, stage and screen both stay as they were.
    fn advance(&mut self, event: FlowEvent, now: Instant) -> Result<()> {
        let (content, config) = (&self.content, &self.config);
        let entered = self
            .sequencer
            .apply_with(event, |next| Screen::enter(next, content, config, now))?;
        if let Some(screen) = entered {
            self.screen = screen;
        }
        Ok(())
    }

    /// Render the active screen
    pub fn render(&mut self, f: &mut ratatui::Frame, now: Instant) {
        self.screen.render(f, now);
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Flow state
    controller: FlowController,
}

impl App {
    /// Create a new application instance
    pub fn new(config: FlowConfig) -> Result<Self> {
        let content = config.content()?;
        Ok(Self {
            tui: Tui::new()?,
            controller: FlowController::new(content, config, Instant::now())?,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        let size = self.tui.size()?;
        if size.width < 60 || size.height < 24 {
            log::warn!("terminal is {}x{}, layout needs at least 60x24", size.width, size.height);
        }
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        let mut events = self.tui.events();
        let mut redraw = time::interval(REDRAW_INTERVAL);
        redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.controller.should_quit() {
            self.draw()?;

            let deadline = self.controller.deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(TuiEvent::Key(key)) => self.controller.handle_key(key, Instant::now())?,
                    Some(TuiEvent::Resize) => {}
                    None => {
                        return Err(QuizFlowError::TuiError("terminal input closed".to_string()));
                    }
                },
                _ = wait_until(deadline) => self.controller.tick(Instant::now())?,
                _ = redraw.tick() => {}
            }
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let now = Instant::now();
        let controller = &mut self.controller;
        self.tui.draw(|f| controller.render(f, now))
    }
}

/// Sleep until `deadline`, or forever when there is none
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}
