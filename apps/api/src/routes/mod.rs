pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ideas::handlers as ideas;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route("/api/v1/quiz/questions", get(quiz::handle_get_questions))
        .route("/api/v1/quiz/score", post(quiz::handle_score_quiz))
        // Ideas API
        .route("/api/v1/ideas/generate", post(ideas::handle_generate_ideas))
        .with_state(state)
}
