//! Practice endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::Result;
use crate::models::{GradeRequest, PracticeQuestion, PracticeSummary};
use crate::AppState;

/// GET /practice
pub async fn generate(State(state): State<AppState>) -> Json<Vec<PracticeQuestion>> {
    let questions = state.repo.practice_set().await;
    tracing::debug!("Generated {} practice questions", questions.len());
    Json(questions)
}

/// POST /practice/grade
pub async fn grade(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<PracticeSummary>> {
    let Json(request) = payload?;
    let summary = state.repo.grade(&request.answers).await;

    tracing::debug!("Graded practice: {}/{}", summary.correct, summary.total);

    Ok(Json(summary))
}
