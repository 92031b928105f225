//! Idea-generation prompt.
//!
//! The field table below is the wire contract between the prompt and the response
//! parser: the parser looks fields up by these exact names.

use crate::models::quiz::ProfileVector;
use crate::models::user::UserProfile;

/// Number of ideas the model is asked for. The parser does not enforce it.
pub const IDEAS_PER_REQUEST: usize = 3;

pub mod fields {
    pub const TITLE: &str = "title";
    pub const SUMMARY: &str = "summary";
    pub const DETAILED_DESCRIPTION: &str = "detailedDescription";
    pub const REQUIRED_SKILLS: &str = "requiredSkills";
    pub const ROUGH_TIMELINE_WEEKS: &str = "roughTimelineWeeks";
    pub const FIRST_30_DAY_PLAN: &str = "first30DayPlan";
    pub const REVENUE_MODEL_HINT: &str = "revenueModelHint";
    pub const ESTIMATED_STARTUP_COST_RANGE: &str = "estimatedStartupCostRange";
    pub const TAGS: &str = "tags";
}

/// Ordered (field name, expected shape) pairs rendered into the prompt.
pub const IDEA_FIELD_CONTRACT: [(&str, &str); 9] = [
    (fields::TITLE, "string, 3-5 words"),
    (fields::SUMMARY, "string, 1-2 sentences"),
    (fields::DETAILED_DESCRIPTION, "string, 2-3 paragraphs"),
    (fields::REQUIRED_SKILLS, "array of strings"),
    (fields::ROUGH_TIMELINE_WEEKS, "integer, estimated weeks to MVP"),
    (fields::FIRST_30_DAY_PLAN, "array of 8-10 task strings"),
    (fields::REVENUE_MODEL_HINT, "string, brief explanation"),
    (
        fields::ESTIMATED_STARTUP_COST_RANGE,
        "string, e.g. \"$500-$2000\"",
    ),
    (fields::TAGS, "array of strings, up to 5"),
];

/// Idea generation prompt template.
/// Replace: {idea_count}, {user_profile}, {profile_scores}, {field_contract}
pub const IDEA_GENERATION_PROMPT_TEMPLATE: &str = r#"You are a business idea generator. Given the user profile below, generate exactly {idea_count} personalized business ideas.

{user_profile}

{profile_scores}

For each idea, provide a JSON object with these fields:
{field_contract}

Return a JSON array with exactly {idea_count} objects. Ensure all ideas are realistic, actionable, and tailored to the user's profile."#;

/// Builds the outbound prompt. Pure: identical inputs give byte-identical output.
pub fn build_idea_prompt(profile: &ProfileVector, user: &UserProfile) -> String {
    let field_contract = IDEA_FIELD_CONTRACT
        .iter()
        .map(|(name, shape)| format!("- {name} ({shape})"))
        .collect::<Vec<_>>()
        .join("\n");

    IDEA_GENERATION_PROMPT_TEMPLATE
        .replace("{idea_count}", &IDEAS_PER_REQUEST.to_string())
        .replace("{field_contract}", &field_contract)
        .replace("{profile_scores}", &format_profile_scores(profile))
        // User-supplied text goes in last so it is never scanned for placeholders.
        .replace("{user_profile}", &format_user_profile(user))
}

fn format_user_profile(user: &UserProfile) -> String {
    format!(
        "User Profile:\n\
         - Skills: {}\n\
         - Interests: {}\n\
         - Personality: {}\n\
         - Risk Tolerance: {}\n\
         - Available Hours/Week: {}\n\
         - Budget: {}\n\
         - Location: {}",
        user.skillsets.join(", "),
        user.interests.join(", "),
        user.personality_traits.join(", "),
        user.risk_tolerance,
        user.available_hours_per_week,
        user.budget_range,
        user.location.as_deref().unwrap_or("Not specified"),
    )
}

fn format_profile_scores(profile: &ProfileVector) -> String {
    format!(
        "Profile Scores (0.00-1.00):\n\
         - Skill Breadth: {:.2}\n\
         - Interest Breadth: {:.2}\n\
         - Personality: {:.2}\n\
         - Risk Appetite: {:.2}\n\
         - Resources: {:.2}",
        profile.skill_score,
        profile.interest_score,
        profile.personality_score,
        profile.risk_score,
        profile.resource_score,
    )
}
