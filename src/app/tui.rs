//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management, and a
//! background reader that forwards keyboard input to the event loop.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{self, Stdout},
    thread,
    time::Duration,
};
use tokio::sync::mpsc;

/// Input relevant to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// The terminal was resized and needs a redraw
    Resize,
}

impl TuiEvent {
    /// Keep key presses and resizes, drop everything else
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    }
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    poll_interval: Duration,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            poll_interval: Duration::from_millis(100),
            active: false,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Get terminal size for responsive layout handling
    pub fn size(&self) -> io::Result<ratatui::layout::Rect> {
        self.terminal.size()
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Start forwarding terminal input on a background thread
    ///
    /// The thread stops once the returned receiver is dropped.
    pub fn events(&self) -> mpsc::UnboundedReceiver<TuiEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let poll_interval = self.poll_interval;
        thread::spawn(move || read_events(tx, poll_interval));
        rx
    }
}

fn read_events(tx: mpsc::UnboundedSender<TuiEvent>, poll_interval: Duration) {
    while !tx.is_closed() {
        match event::poll(poll_interval) {
            Ok(true) => match event::read() {
                Ok(raw) => {
                    if let Some(event) = TuiEvent::from_crossterm(raw) {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    log::error!("terminal read failed: {}", e);
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                log::error!("terminal poll failed: {}", e);
                break;
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
