//! Quiz session state
//!
//! A session walks an immutable question list once. Each question goes
//! through select, reveal and advance; the session refuses any step taken
//! out of that order, which is what keeps a question from being counted
//! twice or the completion from being reported twice.

use std::sync::Arc;

use crate::models::Question;
use crate::{QuizFlowError, Result};

/// Revealed outcome of the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// What a quiz input did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// The input was not applicable in the current state
    Ignored,
    /// The session changed and should be redrawn
    Updated,
    /// The last question was finalized; carries the final score
    Completed(u32),
}

/// Progress through one quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    index: usize,
    score: u32,
    selected: Option<usize>,
    feedback: Option<Feedback>,
    completed: bool,
    streak: u32,
    best_streak: u32,
}

impl QuizSession {
    /// Start a session over `questions`
    pub fn new(questions: Arc<[Question]>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizFlowError::ContentError(
                "A quiz needs at least one question".to_string()
            ));
        }

        Ok(Self {
            questions,
            index: 0,
            score: 0,
            selected: None,
            feedback: None,
            completed: false,
            streak: 0,
            best_streak: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the question on screen
    pub fn index(&self) -> usize {
        self.index
    }

    /// The question on screen
    pub fn current(&self) -> &Question {
        &self.questions[self.index]
    }

    /// Correct answers so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Option index picked for the current question, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Revealed outcome for the current question
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Whether the current question's result has been revealed
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Consecutive correct answers up to now
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Fraction of the quiz behind the learner, in 0.0..=1.0
    ///
    /// Follows the question index and only reaches 1.0 once the last
    /// question has been finalized.
    pub fn progress(&self) -> f64 {
        if self.completed {
            1.0
        } else {
            self.index as f64 / self.questions.len() as f64
        }
    }

    /// Mark `option` as the pending choice
    ///
    /// Returns false when the question is already answered, the quiz is
    /// over, or `option` is out of range.
    pub fn select(&mut self, option: usize) -> bool {
        if self.completed || self.is_answered() || option >= self.current().options.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Reveal the outcome of the pending choice and count it
    ///
    /// Returns `None` if there is nothing to reveal.
    pub fn reveal(&mut self) -> Option<Feedback> {
        if self.completed || self.is_answered() {
            return None;
        }
        let selected = self.selected?;

        let question = &self.questions[self.index];
        let feedback = if question.is_correct(&question.options[selected]) {
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            Feedback::Correct
        } else {
            self.streak = 0;
            Feedback::Incorrect
        };

        log::debug!(
            "question {}/{} revealed as {:?}",
            self.index + 1,
            self.questions.len(),
            feedback
        );
        self.feedback = Some(feedback);
        Some(feedback)
    }

    /// Move past a revealed question, completing the quiz after the last one
    pub fn advance(&mut self) -> QuizStep {
        if self.completed || !self.is_answered() {
            return QuizStep::Ignored;
        }

        if self.is_last() {
            self.completed = true;
            return QuizStep::Completed(self.score);
        }

        self.index += 1;
        self.selected = None;
        self.feedback = None;
        QuizStep::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Arc<[Question]> {
        vec![
            Question::new("q1", ["a", "b"], "a"),
            Question::new("q2", ["a", "b", "c"], "c"),
        ]
        .into()
    }

    #[test]
    fn test_empty_list_rejected() {
        let empty: Arc<[Question]> = Vec::new().into();
        assert!(QuizSession::new(empty).is_err());
    }

    #[test]
    fn test_reveal_requires_selection() {
        let mut session = QuizSession::new(questions()).unwrap();
        assert_eq!(session.reveal(), None);
        assert_eq!(session.advance(), QuizStep::Ignored);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_correct_answer_counts_once() {
        let mut session = QuizSession::new(questions()).unwrap();
        assert!(session.select(0));
        assert_eq!(session.reveal(), Some(Feedback::Correct));
        assert_eq!(session.reveal(), None);
        assert!(!session.select(1));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_incorrect_answer_leaves_score() {
        let mut session = QuizSession::new(questions()).unwrap();
        session.select(1);
        assert_eq!(session.reveal(), Some(Feedback::Incorrect));
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
    }

    #[test]
    fn test_out_of_range_selection() {
        let mut session = QuizSession::new(questions()).unwrap();
        assert!(!session.select(2));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_completion_reported_once() {
        let mut session = QuizSession::new(questions()).unwrap();
        session.select(0);
        session.reveal();
        assert_eq!(session.advance(), QuizStep::Updated);
        assert_eq!(session.index(), 1);
        assert_eq!(session.selected(), None);

        session.select(2);
        session.reveal();
        assert_eq!(session.advance(), QuizStep::Completed(2));
        assert_eq!(session.advance(), QuizStep::Ignored);
        assert!(session.is_completed());
        assert_eq!(session.best_streak(), 2);
    }

    #[test]
    fn test_progress_reaches_one_only_on_completion() {
        let mut session = QuizSession::new(questions()).unwrap();
        assert_eq!(session.progress(), 0.0);
        session.select(0);
        session.reveal();
        session.advance();
        assert_eq!(session.progress(), 0.5);
        session.select(0);
        session.reveal();
        assert_eq!(session.progress(), 0.5);
        session.advance();
        assert_eq!(session.progress(), 1.0);
    }
}
