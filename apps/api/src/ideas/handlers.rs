//! Axum route handlers for the Ideas API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::idea::GeneratedIdea;
use crate::models::quiz::ProfileVector;
use crate::models::user::UserProfile;
use crate::quiz::handlers::ensure_answers_fit_catalog;
use crate::quiz::value::AnswerSet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateIdeasRequest {
    pub user: UserProfile,
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct GenerateIdeasResponse {
    pub profile_vector: ProfileVector,
    pub ideas: Vec<GeneratedIdea>,
}

/// POST /api/v1/ideas/generate
///
/// Scores the answers, asks the model for ideas, and returns them fully populated.
/// Either every parsed idea comes back or the request fails as a whole.
pub async fn handle_generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasRequest>,
) -> Result<Json<GenerateIdeasResponse>, AppError> {
    ensure_answers_fit_catalog(&state.catalog, &request.answers)?;

    let profile_vector = state.scorer.score(&request.answers);
    let ideas = state
        .generator
        .generate(&profile_vector, &request.user)
        .await?;

    Ok(Json(GenerateIdeasResponse {
        profile_vector,
        ideas,
    }))
}
