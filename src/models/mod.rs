//! Data models module
//! 
//! Contains question and lesson content structures, cross-screen scores
//! and the derived result metrics.

pub mod question;
pub mod result;

// Re-export commonly used types
pub use question::{Lesson, Question, MAX_OPTIONS, MIN_OPTIONS};
pub use result::{ResultMetrics, SessionScores, BASE_EXPERIENCE, EXPERIENCE_PER_CORRECT};
