//! Grading of practice answers against the stored meanings.

use crate::types::{AnswerSubmission, GradedAnswer, PracticeSummary, WordRecord};

/// Grade submissions in order.
///
/// Each word is resolved to the first record with exactly that word, and the
/// selection must equal its meaning exactly. Unknown words count as wrong.
pub fn grade_answers(words: &[WordRecord], submissions: &[AnswerSubmission]) -> PracticeSummary {
    let results: Vec<GradedAnswer> = submissions
        .iter()
        .map(|submission| {
            let correct_answer = words
                .iter()
                .find(|r| r.word == submission.word)
                .map(|r| r.meaning.clone());
            let is_correct = correct_answer.as_deref() == Some(submission.selected.as_str());

            GradedAnswer {
                word: submission.word.clone(),
                selected: submission.selected.clone(),
                correct_answer,
                is_correct,
            }
        })
        .collect();

    PracticeSummary {
        total: results.len(),
        correct: results.iter().filter(|r| r.is_correct).count(),
        results,
    }
}
