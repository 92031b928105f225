use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::value::AnswerSet;

/// Five-dimensional summary of a user's quiz answers. Every score lies in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileVector {
    pub skill_score: f64,
    pub interest_score: f64,
    pub personality_score: f64,
    pub risk_score: f64,
    pub resource_score: f64,
}

impl ProfileVector {
    /// Builds a vector, clamping every score into [0.0, 1.0].
    pub fn new(
        skill_score: f64,
        interest_score: f64,
        personality_score: f64,
        risk_score: f64,
        resource_score: f64,
    ) -> Self {
        Self {
            skill_score: skill_score.clamp(0.0, 1.0),
            interest_score: interest_score.clamp(0.0, 1.0),
            personality_score: personality_score.clamp(0.0, 1.0),
            risk_score: risk_score.clamp(0.0, 1.0),
            resource_score: resource_score.clamp(0.0, 1.0),
        }
    }
}

/// A scored quiz, ready to hand to the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub user_id: String,
    pub answers: AnswerSet,
    pub profile_vector: ProfileVector,
    pub created_at: DateTime<Utc>,
}
