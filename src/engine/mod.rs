//! Quiz engine module
//! 
//! Contains the per-quiz session state and the two answer flows
//! (immediate feedback and explicit check) that drive it.

pub mod flow;
pub mod session;

pub use flow::{AnswerFlow, ExplicitCheck, ImmediateFeedback, Quiz, QuizInput};
pub use session::{Feedback, QuizSession, QuizStep};
