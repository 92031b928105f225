//! Axum route handlers for the Quiz API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::quiz::QuizSubmission;
use crate::quiz::catalog::QuestionCatalog;
use crate::quiz::value::AnswerSet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreQuizRequest {
    pub user_id: String,
    pub answers: AnswerSet,
}

/// GET /api/v1/quiz/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/quiz/score
///
/// Scores a completed quiz. The returned submission is what the document store persists.
pub async fn handle_score_quiz(
    State(state): State<AppState>,
    Json(request): Json<ScoreQuizRequest>,
) -> Result<Json<QuizSubmission>, AppError> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    ensure_answers_fit_catalog(&state.catalog, &request.answers)?;

    let profile_vector = state.scorer.score(&request.answers);
    info!(
        "Scored quiz for user {}: {} answers, risk={:.2}, resources={:.2}",
        request.user_id,
        request.answers.iter().count(),
        profile_vector.risk_score,
        profile_vector.resource_score
    );

    Ok(Json(QuizSubmission {
        user_id: request.user_id,
        answers: request.answers,
        profile_vector,
        created_at: Utc::now(),
    }))
}

/// Rejects answer sets with unknown questions or misshapen answers.
pub(crate) fn ensure_answers_fit_catalog(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> Result<(), AppError> {
    let issues = catalog.check_answers(answers);
    if issues.is_empty() {
        return Ok(());
    }
    let details = issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field_key, issue.reason))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::Validation(format!("Invalid answers: {details}")))
}
