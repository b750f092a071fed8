//! Core vocabulary library used by the backend service.
//!
//! Provides:
//! - Word store with seed data and monotonic identifiers
//! - Multiple-choice practice generation
//! - Grading of submitted practice answers
//! - Shared types (WordRecord, NewWord, PracticeQuestion, etc.)

pub mod grading;
pub mod quiz;
pub mod store;
pub mod types;

pub use grading::grade_answers;
pub use quiz::{QuizGenerator, DISTRACTORS_PER_QUESTION, MIN_WORDS_FOR_PRACTICE, OPTIONS_PER_QUESTION};
pub use store::WordStore;
pub use types::{AnswerSubmission, GradedAnswer, NewWord, PracticeQuestion, PracticeSummary, WordRecord};
