//! Multiple-choice practice generation.
//!
//! Every stored word becomes one question whose options are its own meaning
//! plus three meanings sampled from the other records, in random order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{PracticeQuestion, WordRecord};

/// Number of options shown for each question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Number of wrong meanings mixed into each question.
pub const DISTRACTORS_PER_QUESTION: usize = OPTIONS_PER_QUESTION - 1;

/// Below this many words no practice set is produced.
pub const MIN_WORDS_FOR_PRACTICE: usize = OPTIONS_PER_QUESTION;

/// Practice generator owning its random source.
#[derive(Debug, Clone)]
pub struct QuizGenerator<R = StdRng> {
    rng: R,
}

impl QuizGenerator<StdRng> {
    /// Deterministic generator, same seed yields the same practice sets.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> QuizGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build one question per word, in the order given.
    ///
    /// Returns an empty set when there are fewer than
    /// [`MIN_WORDS_FOR_PRACTICE`] words.
    pub fn generate_practice_set(&mut self, words: &[WordRecord]) -> Vec<PracticeQuestion> {
        if words.len() < MIN_WORDS_FOR_PRACTICE {
            return Vec::new();
        }

        words
            .iter()
            .map(|target| self.build_question(target, words))
            .collect()
    }

    fn build_question(&mut self, target: &WordRecord, words: &[WordRecord]) -> PracticeQuestion {
        // Meanings are not deduplicated: two records sharing a meaning both stay in the pool.
        let mut pool: Vec<&str> = words
            .iter()
            .filter(|other| other.id != target.id)
            .map(|other| other.meaning.as_str())
            .collect();

        let (distractors, _) = pool.partial_shuffle(&mut self.rng, DISTRACTORS_PER_QUESTION);

        let mut options: Vec<String> = distractors.iter().map(|m| m.to_string()).collect();
        options.push(target.meaning.clone());
        options.shuffle(&mut self.rng);

        PracticeQuestion {
            word: target.word.clone(),
            options,
            answer: target.meaning.clone(),
        }
    }
}
