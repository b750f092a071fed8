//! Word listing and ingestion endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::Result;
use crate::models::{MessageResponse, NewWord, WordRecord};
use crate::AppState;

/// GET /words
pub async fn list(State(state): State<AppState>) -> Json<Vec<WordRecord>> {
    Json(state.repo.list_words().await)
}

/// POST /words
/// Malformed bodies are rejected before the store is touched
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewWord>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(new_word) = payload?;
    let record = state.repo.add_word(new_word).await;

    tracing::info!("Added word {} ({})", record.id, record.word);

    Ok(Json(MessageResponse {
        message: "Word added successfully".to_string(),
    }))
}
