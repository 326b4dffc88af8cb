//! Answer flows
//!
//! Two ways of walking a [`QuizSession`], behind one trait:
//!
//! - [`ImmediateFeedback`]: picking an option reveals it at once and the
//!   quiz moves on by itself after a short delay.
//! - [`ExplicitCheck`]: picking only marks the option; the learner checks
//!   it and then continues with separate actions.
//!
//! Time is passed in by the caller, so flows never read the clock.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::engine::session::{QuizSession, QuizStep};
use crate::models::Question;
use crate::Result;

/// Learner input understood by every flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// Pick the option at this index
    Select(usize),
    /// Check the pending choice
    Confirm,
    /// Move past a revealed question
    Continue,
}

/// Strategy deciding how inputs and time drive a session
pub trait AnswerFlow {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Apply a learner input
    fn handle(&mut self, session: &mut QuizSession, input: QuizInput, now: Instant) -> QuizStep;

    /// Fire any timer due at `now`
    fn tick(&mut self, _session: &mut QuizSession, _now: Instant) -> QuizStep {
        QuizStep::Ignored
    }

    /// Instant of the next pending timer
    fn deadline(&self) -> Option<Instant> {
        None
    }

    /// Input bound to the screen's main button, or `None` when it is disabled
    fn primary_input(&self, session: &QuizSession, cursor: usize) -> Option<QuizInput>;
}

/// Reveal on pick, then advance after `delay`
#[derive(Debug, Clone)]
pub struct ImmediateFeedback {
    delay: Duration,
    advance_at: Option<Instant>,
}

impl ImmediateFeedback {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            advance_at: None,
        }
    }
}

impl AnswerFlow for ImmediateFeedback {
    fn name(&self) -> &'static str {
        "immediate-feedback"
    }

    fn handle(&mut self, session: &mut QuizSession, input: QuizInput, now: Instant) -> QuizStep {
        match input {
            QuizInput::Select(option) => {
                if !session.select(option) {
                    return QuizStep::Ignored;
                }
                match session.reveal() {
                    Some(_) => {
                        self.advance_at = Some(now + self.delay);
                        QuizStep::Updated
                    }
                    None => QuizStep::Ignored,
                }
            }
            QuizInput::Confirm | QuizInput::Continue => QuizStep::Ignored,
        }
    }

    fn tick(&mut self, session: &mut QuizSession, now: Instant) -> QuizStep {
        match self.advance_at {
            Some(at) if now >= at => {
                self.advance_at = None;
                session.advance()
            }
            _ => QuizStep::Ignored,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.advance_at
    }

    fn primary_input(&self, session: &QuizSession, cursor: usize) -> Option<QuizInput> {
        if session.is_answered() || session.is_completed() {
            None
        } else {
            Some(QuizInput::Select(cursor))
        }
    }
}

/// Pick, check, continue; each step is its own action
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitCheck;

impl AnswerFlow for ExplicitCheck {
    fn name(&self) -> &'static str {
        "explicit-check"
    }

    fn handle(&mut self, session: &mut QuizSession, input: QuizInput, _now: Instant) -> QuizStep {
        match input {
            QuizInput::Select(option) => {
                if session.select(option) {
                    QuizStep::Updated
                } else {
                    QuizStep::Ignored
                }
            }
            QuizInput::Confirm => match session.reveal() {
                Some(_) => QuizStep::Updated,
                None => QuizStep::Ignored,
            },
            QuizInput::Continue => session.advance(),
        }
    }

    fn primary_input(&self, session: &QuizSession, _cursor: usize) -> Option<QuizInput> {
        if session.is_completed() {
            None
        } else if session.is_answered() {
            Some(QuizInput::Continue)
        } else if session.selected().is_some() {
            Some(QuizInput::Confirm)
        } else {
            None
        }
    }
}

/// A session paired with the flow that drives it
#[derive(Debug, Clone)]
pub struct Quiz<F: AnswerFlow> {
    session: QuizSession,
    flow: F,
}

impl<F: AnswerFlow> Quiz<F> {
    /// Start a quiz over `questions` using `flow`
    pub fn new(questions: Arc<[Question]>, flow: F) -> Result<Self> {
        Ok(Self {
            session: QuizSession::new(questions)?,
            flow,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Apply a learner input
    pub fn handle(&mut self, input: QuizInput, now: Instant) -> QuizStep {
        let step = self.flow.handle(&mut self.session, input, now);
        self.log_completion(step);
        step
    }

    /// Fire any timer due at `now`
    pub fn tick(&mut self, now: Instant) -> QuizStep {
        let step = self.flow.tick(&mut self.session, now);
        self.log_completion(step);
        step
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.flow.deadline()
    }

    pub fn primary_input(&self, cursor: usize) -> Option<QuizInput> {
        self.flow.primary_input(&self.session, cursor)
    }

    fn log_completion(&self, step: QuizStep) {
        if let QuizStep::Completed(score) = step {
            log::info!(
                "{} quiz completed: {}/{} correct",
                self.flow.name(),
                score,
                self.session.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    fn three_questions() -> Arc<[Question]> {
        vec![
            Question::new("q1", ["a", "b", "c"], "a"),
            Question::new("q2", ["a", "b", "c"], "b"),
            Question::new("q3", ["a", "b", "c", "d"], "d"),
        ]
        .into()
    }

    fn immediate() -> Quiz<ImmediateFeedback> {
        Quiz::new(three_questions(), ImmediateFeedback::new(DELAY)).unwrap()
    }

    fn explicit() -> Quiz<ExplicitCheck> {
        Quiz::new(three_questions(), ExplicitCheck).unwrap()
    }

    /// Answer the current question under immediate feedback and wait out the delay
    fn answer_immediate(quiz: &mut Quiz<ImmediateFeedback>, option: usize, now: &mut Instant) -> QuizStep {
        assert_eq!(quiz.handle(QuizInput::Select(option), *now), QuizStep::Updated);
        *now += DELAY;
        quiz.tick(*now)
    }

    fn answer_explicit(quiz: &mut Quiz<ExplicitCheck>, option: usize, now: Instant) -> QuizStep {
        assert_eq!(quiz.handle(QuizInput::Select(option), now), QuizStep::Updated);
        assert_eq!(quiz.handle(QuizInput::Confirm, now), QuizStep::Updated);
        quiz.handle(QuizInput::Continue, now)
    }

    #[test]
    fn test_immediate_all_correct_reports_three() {
        let mut quiz = immediate();
        let mut now = Instant::now();

        assert_eq!(answer_immediate(&mut quiz, 0, &mut now), QuizStep::Updated);
        assert_eq!(answer_immediate(&mut quiz, 1, &mut now), QuizStep::Updated);
        assert_eq!(answer_immediate(&mut quiz, 3, &mut now), QuizStep::Completed(3));

        // Nothing left to report
        assert_eq!(quiz.tick(now + DELAY), QuizStep::Ignored);
        assert_eq!(quiz.handle(QuizInput::Select(0), now), QuizStep::Ignored);
    }

    #[test]
    fn test_immediate_reveals_on_select() {
        let mut quiz = immediate();
        let now = Instant::now();

        quiz.handle(QuizInput::Select(2), now);
        assert!(quiz.session().is_answered());
        assert_eq!(quiz.session().score(), 0);
        assert_eq!(quiz.deadline(), Some(now + DELAY));
    }

    #[test]
    fn test_immediate_ignores_second_pick() {
        let mut quiz = immediate();
        let now = Instant::now();

        quiz.handle(QuizInput::Select(0), now);
        assert_eq!(quiz.handle(QuizInput::Select(1), now), QuizStep::Ignored);
        assert_eq!(quiz.session().selected(), Some(0));
        assert_eq!(quiz.session().score(), 1);
    }

    #[test]
    fn test_immediate_waits_for_delay() {
        let mut quiz = immediate();
        let now = Instant::now();

        quiz.handle(QuizInput::Select(0), now);
        assert_eq!(quiz.tick(now + DELAY / 2), QuizStep::Ignored);
        assert_eq!(quiz.session().index(), 0);
        assert_eq!(quiz.tick(now + DELAY), QuizStep::Updated);
        assert_eq!(quiz.session().index(), 1);
        assert_eq!(quiz.deadline(), None);
    }

    #[test]
    fn test_immediate_ignores_confirm_and_continue() {
        let mut quiz = immediate();
        let now = Instant::now();

        assert_eq!(quiz.handle(QuizInput::Confirm, now), QuizStep::Ignored);
        quiz.handle(QuizInput::Select(0), now);
        assert_eq!(quiz.handle(QuizInput::Continue, now), QuizStep::Ignored);
        assert_eq!(quiz.session().index(), 0);
    }

    #[test]
    fn test_explicit_two_of_three() {
        let mut quiz = explicit();
        let now = Instant::now();

        assert_eq!(answer_explicit(&mut quiz, 0, now), QuizStep::Updated);
        assert_eq!(answer_explicit(&mut quiz, 2, now), QuizStep::Updated);
        assert_eq!(answer_explicit(&mut quiz, 3, now), QuizStep::Completed(2));
        assert_eq!(quiz.handle(QuizInput::Continue, now), QuizStep::Ignored);
    }

    #[test]
    fn test_explicit_last_question_not_double_counted() {
        let mut quiz = explicit();
        let now = Instant::now();

        answer_explicit(&mut quiz, 0, now);
        answer_explicit(&mut quiz, 1, now);
        // Last answer correct; the final score must be 3, not 4
        assert_eq!(answer_explicit(&mut quiz, 3, now), QuizStep::Completed(3));
    }

    #[test]
    fn test_explicit_confirm_disabled_without_selection() {
        let mut quiz = explicit();
        let now = Instant::now();

        assert_eq!(quiz.primary_input(0), None);
        assert_eq!(quiz.handle(QuizInput::Confirm, now), QuizStep::Ignored);
        assert_eq!(quiz.handle(QuizInput::Continue, now), QuizStep::Ignored);
        assert_eq!(quiz.session().index(), 0);
        assert_eq!(quiz.session().selected(), None);
        assert!(!quiz.session().is_answered());
        assert_eq!(quiz.session().score(), 0);
    }

    #[test]
    fn test_explicit_selection_is_pending_until_confirm() {
        let mut quiz = explicit();
        let now = Instant::now();

        quiz.handle(QuizInput::Select(1), now);
        assert!(!quiz.session().is_answered());
        assert_eq!(quiz.primary_input(0), Some(QuizInput::Confirm));

        // Still free to change the pick
        quiz.handle(QuizInput::Select(0), now);
        quiz.handle(QuizInput::Confirm, now);
        assert_eq!(quiz.session().score(), 1);
        assert_eq!(quiz.primary_input(0), Some(QuizInput::Continue));
        assert_eq!(quiz.handle(QuizInput::Select(2), now), QuizStep::Ignored);
        assert_eq!(quiz.handle(QuizInput::Confirm, now), QuizStep::Ignored);
        assert_eq!(quiz.session().score(), 1);
    }

    #[test]
    fn test_explicit_has_no_timer() {
        let mut quiz = explicit();
        let now = Instant::now();

        quiz.handle(QuizInput::Select(0), now);
        quiz.handle(QuizInput::Confirm, now);
        assert_eq!(quiz.deadline(), None);
        assert_eq!(quiz.tick(now + Duration::from_secs(60)), QuizStep::Ignored);
        assert_eq!(quiz.session().index(), 0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut quiz = explicit();
        let now = Instant::now();
        let mut last = quiz.session().progress();

        for option in [0, 1, 3] {
            for input in [QuizInput::Select(option), QuizInput::Confirm, QuizInput::Continue] {
                quiz.handle(input, now);
                let progress = quiz.session().progress();
                assert!(progress >= last);
                if !quiz.session().is_completed() {
                    assert!(progress < 1.0);
                }
                last = progress;
            }
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_score_bounded_for_any_answers() {
        let now = Instant::now();
        for pattern in 0..27u32 {
            let mut quiz = explicit();
            let mut completions = Vec::new();
            let mut p = pattern;
            for _ in 0..3 {
                let option = (p % 3) as usize;
                p /= 3;
                quiz.handle(QuizInput::Select(option), now);
                quiz.handle(QuizInput::Confirm, now);
                if let QuizStep::Completed(score) = quiz.handle(QuizInput::Continue, now) {
                    completions.push(score);
                }
            }
            assert_eq!(completions.len(), 1);
            assert!(completions[0] <= 3);
        }
    }
}
