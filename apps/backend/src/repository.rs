//! In-memory word repository shared by the route handlers.

use tokio::sync::Mutex;
use vocab_core::{
    grade_answers, AnswerSubmission, NewWord, PracticeQuestion, PracticeSummary, QuizGenerator,
    WordRecord, WordStore,
};

/// Serializes all store access behind one lock.
///
/// The practice generator has its own lock so that generating a set does not
/// hold up ingestion: words are copied out first, then the lock is released.
pub struct WordRepository {
    store: Mutex<WordStore>,
    quiz: Mutex<QuizGenerator>,
}

impl WordRepository {
    pub fn new(store: WordStore, quiz: QuizGenerator) -> Self {
        Self {
            store: Mutex::new(store),
            quiz: Mutex::new(quiz),
        }
    }

    /// Snapshot of all words in insertion order
    pub async fn list_words(&self) -> Vec<WordRecord> {
        self.store.lock().await.list_all().to_vec()
    }

    /// Append a word and return the stored record
    pub async fn add_word(&self, new_word: NewWord) -> WordRecord {
        self.store.lock().await.append(new_word)
    }

    pub async fn word_count(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Fresh practice set over the current words
    pub async fn practice_set(&self) -> Vec<PracticeQuestion> {
        let words = self.list_words().await;
        self.quiz.lock().await.generate_practice_set(&words)
    }

    /// Grade submitted answers against the current words
    pub async fn grade(&self, answers: &[AnswerSubmission]) -> PracticeSummary {
        let store = self.store.lock().await;
        grade_answers(store.list_all(), answers)
    }
}
