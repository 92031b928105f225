use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully-populated business idea. Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIdea {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    /// One or two lines.
    pub summary: String,
    pub detailed_description: String,
    pub required_skills: Vec<String>,
    /// Always at least 1.
    pub rough_timeline_weeks: u32,
    pub first_30_day_plan: Vec<String>,
    pub revenue_model_hint: String,
    /// e.g. "$500-$2000"
    pub estimated_startup_cost_range: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
}
