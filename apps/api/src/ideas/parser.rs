//! Response parser — turns raw model text into idea drafts.
//!
//! Two failure levels:
//! - batch level: the cleaned text is not a JSON array → `LlmError::Decoding`, no drafts.
//! - field level: a missing or mistyped field → that field is `None`, never an error.
//!
//! Non-object array elements are skipped. The idea count requested in the prompt is
//! not enforced; any number of drafts, including zero, is a valid result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ideas::prompts::fields;
use crate::llm_client::LlmError;
use crate::quiz::value::DynamicValue;

const FENCE: &str = "```";

/// An idea as extracted from model output, before defaults are applied.
/// `None` means the field was absent or had the wrong shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaDraft {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub detailed_description: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub rough_timeline_weeks: Option<i64>,
    pub first_30_day_plan: Option<Vec<String>>,
    pub revenue_model_hint: Option<String>,
    pub estimated_startup_cost_range: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl IdeaDraft {
    fn from_map(map: &BTreeMap<String, DynamicValue>) -> Self {
        let string = |key: &str| map.get(key).and_then(DynamicValue::as_str).map(String::from);
        let strings = |key: &str| map.get(key).and_then(DynamicValue::string_items);

        Self {
            title: string(fields::TITLE),
            summary: string(fields::SUMMARY),
            detailed_description: string(fields::DETAILED_DESCRIPTION),
            required_skills: strings(fields::REQUIRED_SKILLS),
            rough_timeline_weeks: map
                .get(fields::ROUGH_TIMELINE_WEEKS)
                .and_then(DynamicValue::as_i64),
            first_30_day_plan: strings(fields::FIRST_30_DAY_PLAN),
            revenue_model_hint: string(fields::REVENUE_MODEL_HINT),
            estimated_startup_cost_range: string(fields::ESTIMATED_STARTUP_COST_RANGE),
            tags: strings(fields::TAGS),
        }
    }
}

/// Parses raw model output into drafts, one per JSON object in the top-level array.
pub fn parse_ideas(raw_text: &str) -> Result<Vec<IdeaDraft>, LlmError> {
    let cleaned = strip_code_fences(raw_text);

    let value: DynamicValue = serde_json::from_str(cleaned.trim())
        .map_err(|e| LlmError::Decoding(format!("model output is not valid JSON: {e}")))?;

    let kind = value.kind();
    let DynamicValue::List(elements) = value else {
        return Err(LlmError::Decoding(format!(
            "expected a JSON array of ideas, found a {kind}"
        )));
    };

    let mut drafts = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match element.as_map() {
            Some(map) => drafts.push(IdeaDraft::from_map(map)),
            None => warn!(
                "Skipping idea element {index}: expected an object, found a {}",
                element.kind()
            ),
        }
    }

    debug!(
        "Parsed {} idea drafts from {} array elements",
        drafts.len(),
        elements.len()
    );

    Ok(drafts)
}

/// Removes markdown code-fence markers: every "```" plus any language tag glued to it.
/// Purely textual, applied before any JSON decoding.
fn strip_code_fences(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(FENCE) {
        cleaned.push_str(&rest[..start]);
        let after = &rest[start + FENCE.len()..];
        let tag_len = after
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(after.len());
        rest = &after[tag_len..];
    }
    cleaned.push_str(rest);
    cleaned
}
