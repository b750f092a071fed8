//! In-memory, append-only word store.

use crate::types::{NewWord, WordRecord};

/// Words available on a fresh start, as (word, meaning, example).
const SEED_WORDS: [(&str, &str, &str); 4] = [
    ("Cat", "Cat is a pet animal", "I have a cat"),
    ("Peacock", "Peacock is a bird", "Peacock is our national bird"),
    ("Resilient", "Able to recover quickly", "She is resilient"),
    ("Sun", "The star of our solar system", "Sun gives energy"),
];

/// Ordered collection of word records.
///
/// IDs come from a dedicated counter rather than the collection length,
/// so they stay unique even if removal is ever added.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<WordRecord>,
    next_id: u64,
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStore {
    /// Create an empty store. The first appended word gets ID 1.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the seed words with IDs 1-4.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (word, meaning, example) in SEED_WORDS {
            store.append(NewWord::new(word, meaning, example));
        }
        store
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[WordRecord] {
        &self.words
    }

    /// Append a new record and return a copy of it.
    pub fn append(&mut self, new_word: NewWord) -> WordRecord {
        let record = WordRecord {
            id: self.next_id,
            word: new_word.word,
            meaning: new_word.meaning,
            example: new_word.example,
        };
        self.next_id += 1;
        self.words.push(record.clone());
        record
    }

    /// First record whose word matches exactly.
    pub fn find_by_word(&self, word: &str) -> Option<&WordRecord> {
        self.words.iter().find(|r| r.word == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_store() {
        let store = WordStore::seeded();
        let words: Vec<(u64, &str)> = store
            .list_all()
            .iter()
            .map(|r| (r.id, r.word.as_str()))
            .collect();

        assert_eq!(
            words,
            vec![(1, "Cat"), (2, "Peacock"), (3, "Resilient"), (4, "Sun")]
        );
        assert_eq!(store.list_all()[3].meaning, "The star of our solar system");
        assert_eq!(store.list_all()[1].example, "Peacock is our national bird");
    }

    #[test]
    fn test_empty_store() {
        let store = WordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut store = WordStore::seeded();
        for k in 1..=5u64 {
            let record = store.append(NewWord::new(format!("Word {k}"), "meaning", "example"));
            assert_eq!(record.id, 4 + k);
        }
        assert_eq!(store.len(), 9);

        let ids: Vec<u64> = store.list_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_append_keeps_fields_verbatim() {
        let mut store = WordStore::new();
        let record = store.append(NewWord::new("  cat ", "", "Cat"));
        let duplicate = store.append(NewWord::new("  cat ", "", "Cat"));

        assert_eq!(record.id, 1);
        assert_eq!(duplicate.id, 2);
        assert_eq!(record.word, "  cat ");
        assert_eq!(record.meaning, "");
        assert_eq!(store.list_all()[0], record);
        assert_eq!(store.list_all()[1], duplicate);
    }

    #[test]
    fn test_find_by_word_returns_first_match() {
        let mut store = WordStore::seeded();
        store.append(NewWord::new("Cat", "Another cat", ""));

        let found = store.find_by_word("Cat").unwrap();
        assert_eq!(found.id, 1);
        assert!(store.find_by_word("cat").is_none());
        assert!(store.find_by_word("Dog").is_none());
    }
}
