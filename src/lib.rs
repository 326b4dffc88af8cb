//! QUIZFLOW - gamified lesson flow
//!
//! A terminal application that walks a learner through a fixed sequence:
//! welcome, placement quiz, level-up, lesson card, practice quiz and a
//! result summary with experience points and accuracy.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod content;
pub mod engine;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum QuizFlowError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Content pack validation or parsing error
    ContentError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for QuizFlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizFlowError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizFlowError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizFlowError::ContentError(msg) => write!(f, "Content error: {}", msg),
            QuizFlowError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for QuizFlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizFlowError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizFlowError {
    fn from(err: std::io::Error) -> Self {
        QuizFlowError::IoError(err)
    }
}

impl From<serde_json::Error> for QuizFlowError {
    fn from(err: serde_json::Error) -> Self {
        QuizFlowError::ContentError(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for QuizFlowError {
    fn from(err: toml::de::Error) -> Self {
        QuizFlowError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizFlowError {
    fn from(err: toml::ser::Error) -> Self {
        QuizFlowError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for QUIZFLOW operations
pub type Result<T> = std::result::Result<T, QuizFlowError>;

/// Error handling utilities
pub mod error {
    use super::QuizFlowError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &QuizFlowError) -> String {
        match error {
            QuizFlowError::ConfigError(msg) => {
                format!("Configuration error: {}. Check {} or delete it to use defaults.", msg, super::CONFIG_FILE)
            }
            QuizFlowError::ContentError(msg) => {
                format!("Content pack rejected: {}. Fix the file or remove content_path from the config.", msg)
            }
            QuizFlowError::TuiError(_) => {
                "Terminal could not be driven. Make sure quizflow runs in an interactive terminal.".to_string()
            }
            QuizFlowError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "quizflow";
pub const CONFIG_FILE: &str = "quizflow.toml";
