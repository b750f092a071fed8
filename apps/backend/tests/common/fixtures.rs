//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use vocab_core::{NewWord, WordStore};

/// Create a POST /words request body.
pub fn new_word_request(word: &str, meaning: &str, example: &str) -> serde_json::Value {
    json!({
        "word": word,
        "meaning": meaning,
        "example": example
    })
}

/// The dog example word.
pub fn dog_request() -> serde_json::Value {
    new_word_request("Dog", "Dog is a pet", "I have a dog")
}

/// Create a POST /practice/grade request body from (word, selected) pairs.
pub fn grade_request(answers: &[(&str, &str)]) -> serde_json::Value {
    let answers: Vec<serde_json::Value> = answers
        .iter()
        .map(|(word, selected)| json!({ "word": word, "selected": selected }))
        .collect();
    json!({ "answers": answers })
}

/// Store with `count` generated words and distinct meanings.
pub fn store_with_words(count: usize) -> WordStore {
    let mut store = WordStore::new();
    for i in 1..=count {
        store.append(NewWord::new(
            format!("Word {}", i),
            format!("Meaning {}", i),
            format!("Example {}", i),
        ));
    }
    store
}
