use serde::{Deserialize, Serialize};

/// User attributes that personalise the idea-generation prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub skillsets: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    /// "low", "medium" or "high"; passed through to the prompt verbatim.
    #[serde(default)]
    pub risk_tolerance: String,
    #[serde(default)]
    pub available_hours_per_week: u32,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub location: Option<String>,
}
