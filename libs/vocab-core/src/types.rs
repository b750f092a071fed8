//! Core types for the vocabulary application.

use serde::{Deserialize, Serialize};

/// A stored word with its meaning and an example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: u64,
    pub word: String,
    pub meaning: String,
    pub example: String,
}

/// Candidate word submitted for ingestion (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub word: String,
    pub meaning: String,
    pub example: String,
}

impl NewWord {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            example: example.into(),
        }
    }
}

/// Multiple-choice question derived from the store. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub word: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// An option the learner picked for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub word: String,
    pub selected: String,
}

/// Outcome of grading a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub word: String,
    pub selected: String,
    /// Stored meaning of the word, `None` when the word is unknown.
    pub correct_answer: Option<String>,
    pub is_correct: bool,
}

/// Totals for a graded practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSummary {
    pub total: usize,
    pub correct: usize,
    pub results: Vec<GradedAnswer>,
}
