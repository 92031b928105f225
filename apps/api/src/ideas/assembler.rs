//! Idea assembly — fills in defaults so every draft becomes a complete `GeneratedIdea`.

use chrono::Utc;
use uuid::Uuid;

use crate::ideas::parser::IdeaDraft;
use crate::models::idea::GeneratedIdea;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_TIMELINE_WEEKS: u32 = 12;
pub const DEFAULT_STARTUP_COST_RANGE: &str = "$0-500";

/// Builds a complete idea from a draft. Never rejects: every draft yields one idea.
///
/// Stamps a fresh id and the current time. A timeline below one week, or one that does
/// not fit a `u32`, is treated like a missing timeline.
pub fn assemble_idea(draft: IdeaDraft, fallback_user_id: &str) -> GeneratedIdea {
    let rough_timeline_weeks = draft
        .rough_timeline_weeks
        .and_then(|weeks| u32::try_from(weeks).ok())
        .filter(|weeks| *weeks >= 1)
        .unwrap_or(DEFAULT_TIMELINE_WEEKS);

    GeneratedIdea {
        id: Uuid::new_v4(),
        user_id: fallback_user_id.to_string(),
        title: draft.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        summary: draft.summary.unwrap_or_default(),
        detailed_description: draft.detailed_description.unwrap_or_default(),
        required_skills: draft.required_skills.unwrap_or_default(),
        rough_timeline_weeks,
        first_30_day_plan: draft.first_30_day_plan.unwrap_or_default(),
        revenue_model_hint: draft.revenue_model_hint.unwrap_or_default(),
        estimated_startup_cost_range: draft
            .estimated_startup_cost_range
            .unwrap_or_else(|| DEFAULT_STARTUP_COST_RANGE.to_string()),
        tags: draft.tags.unwrap_or_default(),
        created_at: Utc::now(),
        is_favorite: false,
    }
}
