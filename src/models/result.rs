//! Score and result metric models
//!
//! Scores accumulated across screens and the experience / accuracy
//! figures derived from the practice quiz.

use crate::util::format::round_percent;
use serde::{Deserialize, Serialize};

/// Experience awarded for every correct practice answer
pub const EXPERIENCE_PER_CORRECT: u32 = 10;
/// Experience awarded for finishing the lesson at all
pub const BASE_EXPERIENCE: u32 = 50;

/// Correct-answer counts reported by the two quizzes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScores {
    /// Score of the placement quiz
    pub placement: u32,
    /// Score of the practice quiz
    pub practice: u32,
}

impl SessionScores {
    /// Level shown on the level-up screen
    pub fn placement_level(&self) -> u32 {
        self.placement.max(1)
    }
}

/// Metrics shown on the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetrics {
    /// Experience points earned
    pub experience: u32,
    /// Practice accuracy in whole percent
    pub accuracy: u8,
}

impl ResultMetrics {
    /// Derive metrics from the practice quiz outcome
    pub fn from_practice(correct: u32, question_count: u32) -> Self {
        Self {
            experience: correct * EXPERIENCE_PER_CORRECT + BASE_EXPERIENCE,
            accuracy: round_percent(correct, question_count),
        }
    }
}
