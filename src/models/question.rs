//! Question and lesson content models
//!
//! The correct option of a question is designated by value, not by index.
//! Whatever value the content carries is trusted as-is; validation only
//! checks that it is one of the options.

use crate::{QuizFlowError, Result};
use serde::{Deserialize, Serialize};

/// Fewest answer options a question may offer
pub const MIN_OPTIONS: usize = 2;
/// Most answer options a question may offer
pub const MAX_OPTIONS: usize = 4;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt shown above the options
    pub prompt: String,
    /// Ordered answer options
    pub options: Vec<String>,
    /// The option value that counts as correct
    pub correct: String,
}

impl Question {
    /// Create a new question
    pub fn new<P, O, C>(prompt: P, options: O, correct: C) -> Self
    where
        P: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        C: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct: correct.into(),
        }
    }

    /// Whether `option` is the designated correct value
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }

    /// Index of the correct option within `options`
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.correct)
    }

    /// Validate the question
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(QuizFlowError::ContentError(
                "Question prompt must not be empty".to_string()
            ));
        }

        if self.options.len() < MIN_OPTIONS || self.options.len() > MAX_OPTIONS {
            return Err(QuizFlowError::ContentError(format!(
                "Question '{}' has {} options (expected {} to {})",
                self.prompt, self.options.len(), MIN_OPTIONS, MAX_OPTIONS
            )));
        }

        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(QuizFlowError::ContentError(format!(
                "Question '{}' has an empty option", self.prompt
            )));
        }

        // Selection is compared by value, so duplicates would be ambiguous
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(QuizFlowError::ContentError(format!(
                    "Question '{}' lists option '{}' twice", self.prompt, option
                )));
            }
        }

        if self.correct_index().is_none() {
            return Err(QuizFlowError::ContentError(format!(
                "Question '{}': correct answer '{}' is not one of its options",
                self.prompt, self.correct
            )));
        }

        Ok(())
    }
}

/// The lesson card shown between the two quizzes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Card heading
    pub title: String,
    /// Paragraphs in reading order; the first one is the lead
    pub body: Vec<String>,
}

impl Lesson {
    /// Lead paragraph, rendered emphasized
    pub fn lead(&self) -> Option<&str> {
        self.body.first().map(String::as_str)
    }

    /// Validate the lesson card
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(QuizFlowError::ContentError(
                "Lesson title must not be empty".to_string()
            ));
        }
        if self.body.is_empty() {
            return Err(QuizFlowError::ContentError(format!(
                "Lesson '{}' has no paragraphs", self.title
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new("Maghrib rakaat", ["3", "4", "2"], "3")
    }

    #[test]
    fn test_valid_question() {
        let q = sample();
        assert!(q.validate().is_ok());
        assert_eq!(q.correct_index(), Some(0));
        assert!(q.is_correct("3"));
        assert!(!q.is_correct("4"));
    }

    #[test]
    fn test_correct_must_be_an_option() {
        let q = Question::new("Q", ["a", "b"], "c");
        assert!(matches!(q.validate(), Err(QuizFlowError::ContentError(_))));
    }

    #[test]
    fn test_option_count_bounds() {
        assert!(Question::new("Q", ["a"], "a").validate().is_err());
        assert!(Question::new("Q", ["a", "b", "c", "d", "e"], "a").validate().is_err());
        assert!(Question::new("Q", ["a", "b", "c", "d"], "d").validate().is_ok());
    }

    #[test]
    fn test_duplicate_and_empty_options_rejected() {
        assert!(Question::new("Q", ["a", "a"], "a").validate().is_err());
        assert!(Question::new("Q", ["a", " "], "a").validate().is_err());
        assert!(Question::new(" ", ["a", "b"], "a").validate().is_err());
    }

    #[test]
    fn test_lesson_validation() {
        let lesson = Lesson {
            title: "Purity".to_string(),
            body: vec!["Two kinds".to_string(), "Inner".to_string()],
        };
        assert!(lesson.validate().is_ok());
        assert_eq!(lesson.lead(), Some("Two kinds"));

        let empty = Lesson { title: "Purity".to_string(), body: Vec::new() };
        assert!(empty.validate().is_err());
    }
}
