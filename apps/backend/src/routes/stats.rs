//! Store statistics endpoint

use axum::{extract::State, Json};
use vocab_core::MIN_WORDS_FOR_PRACTICE;

use crate::models::StatsResponse;
use crate::AppState;

/// GET /stats
pub async fn summary(State(state): State<AppState>) -> Json<StatsResponse> {
    let word_count = state.repo.word_count().await;
    Json(StatsResponse {
        word_count,
        practice_available: word_count >= MIN_WORDS_FOR_PRACTICE,
    })
}
