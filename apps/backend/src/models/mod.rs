//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from vocab-core
pub use vocab_core::types::{
    AnswerSubmission, GradedAnswer, NewWord, PracticeQuestion, PracticeSummary, WordRecord,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// Practice types
#[derive(Debug, Serialize, Deserialize)]
pub struct GradeRequest {
    pub answers: Vec<AnswerSubmission>,
}

// Stats types
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub word_count: usize,
    pub practice_available: bool,
}
