//! Profile scoring — reduces an answer set to a `ProfileVector`.
//!
//! Total and deterministic: unanswered or unrecognised answers fall back to neutral
//! values instead of failing.

use crate::models::quiz::ProfileVector;
use crate::quiz::catalog::{
    AVAILABLE_HOURS, BUDGET_OPTIONS, HOURS_OPTIONS, INITIAL_BUDGET, INTERESTED_INDUSTRIES,
    RISK_HIGH, RISK_LOW, RISK_MEDIUM, RISK_TOLERANCE, TOP_SKILLS,
};
use crate::quiz::value::{AnswerSet, DynamicValue};

/// Skill selections needed for a full skill score.
const SKILLS_FOR_FULL_SCORE: f64 = 5.0;
/// Industry selections needed for a full interest score.
const INDUSTRIES_FOR_FULL_SCORE: f64 = 3.0;
/// No personality signal is derived from answers yet.
pub const NEUTRAL_PERSONALITY_SCORE: f64 = 0.5;
pub const NEUTRAL_RISK_SCORE: f64 = 0.5;
/// Score for each bucket of the hours and budget questions, lowest bucket first.
const RESOURCE_BUCKET_SCORES: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Stateless scorer. Construct one and share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileScorer;

impl ProfileScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, answers: &AnswerSet) -> ProfileVector {
        ProfileVector::new(
            selection_ratio(answers.get(TOP_SKILLS), SKILLS_FOR_FULL_SCORE),
            selection_ratio(answers.get(INTERESTED_INDUSTRIES), INDUSTRIES_FOR_FULL_SCORE),
            NEUTRAL_PERSONALITY_SCORE,
            risk_score(answers.get(RISK_TOLERANCE)),
            resource_score(answers.get(AVAILABLE_HOURS), answers.get(INITIAL_BUDGET)),
        )
    }
}

/// `min(selected / full, 1.0)`, or 0 when the answer is missing or not a list.
fn selection_ratio(value: Option<&DynamicValue>, full: f64) -> f64 {
    let selected = value.and_then(DynamicValue::as_list).map_or(0, <[_]>::len);
    (selected as f64 / full).min(1.0)
}

fn risk_score(value: Option<&DynamicValue>) -> f64 {
    match value.and_then(DynamicValue::as_str) {
        Some(RISK_LOW) => 0.3,
        Some(RISK_MEDIUM) => 0.5,
        Some(RISK_HIGH) => 0.8,
        _ => NEUTRAL_RISK_SCORE,
    }
}

/// Average of the hours and budget bucket scores. An unmatched half contributes 0.
fn resource_score(hours: Option<&DynamicValue>, budget: Option<&DynamicValue>) -> f64 {
    let total = bucket_score(hours, &HOURS_OPTIONS) + bucket_score(budget, &BUDGET_OPTIONS);
    (total / 2.0).clamp(0.0, 1.0)
}

fn bucket_score(value: Option<&DynamicValue>, buckets: &[&str; 4]) -> f64 {
    value
        .and_then(DynamicValue::as_str)
        .and_then(|answer| buckets.iter().position(|bucket| *bucket == answer))
        .map_or(0.0, |index| RESOURCE_BUCKET_SCORES[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::CONSTRAINTS;

    fn score(answers: &AnswerSet) -> ProfileVector {
        ProfileScorer::new().score(answers)
    }

    #[test]
    fn test_skill_score_scales_with_selection_count() {
        for n in 0..=10 {
            let skills: Vec<String> = (0..n).map(|i| format!("skill-{i}")).collect();
            let answers = AnswerSet::new().with(TOP_SKILLS, skills);
            let expected = (n as f64 / 5.0).min(1.0);
            let actual = score(&answers).skill_score;
            assert!(
                (actual - expected).abs() < f64::EPSILON,
                "n={n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_interest_score_caps_at_three() {
        let two = AnswerSet::new().with(INTERESTED_INDUSTRIES, vec!["SaaS", "Finance"]);
        assert!((score(&two).interest_score - 2.0 / 3.0).abs() < 1e-9);

        let five = AnswerSet::new().with(
            INTERESTED_INDUSTRIES,
            vec!["SaaS", "Finance", "Education", "Healthcare", "E-commerce"],
        );
        assert_eq!(score(&five).interest_score, 1.0);
    }

    #[test]
    fn test_non_list_selection_scores_zero() {
        let answers = AnswerSet::new()
            .with(TOP_SKILLS, "Sales")
            .with(INTERESTED_INDUSTRIES, 3_i64);
        let profile = score(&answers);
        assert_eq!(profile.skill_score, 0.0);
        assert_eq!(profile.interest_score, 0.0);
    }

    #[test]
    fn test_full_resources_score_one() {
        let answers = AnswerSet::new()
            .with(INITIAL_BUDGET, "$5000+")
            .with(AVAILABLE_HOURS, "40+ hours");
        assert_eq!(score(&answers).resource_score, 1.0);
    }

    #[test]
    fn test_resource_halves_are_independent() {
        let hours_only = AnswerSet::new().with(AVAILABLE_HOURS, "10-20 hours");
        assert_eq!(score(&hours_only).resource_score, 0.25);

        let mixed = AnswerSet::new()
            .with(AVAILABLE_HOURS, "1-10 hours")
            .with(INITIAL_BUDGET, "$2000-5000");
        assert_eq!(score(&mixed).resource_score, 0.5);

        let unmatched = AnswerSet::new()
            .with(AVAILABLE_HOURS, "forty hours")
            .with(INITIAL_BUDGET, "$5000+");
        assert_eq!(score(&unmatched).resource_score, 0.5);
    }

    #[test]
    fn test_missing_risk_tolerance_is_neutral() {
        assert_eq!(score(&AnswerSet::new()).risk_score, 0.5);
    }

    #[test]
    fn test_risk_table() {
        let cases = [
            (RISK_LOW, 0.3),
            (RISK_MEDIUM, 0.5),
            (RISK_HIGH, 0.8),
            ("low", 0.5),
            ("Reckless", 0.5),
        ];
        for (answer, expected) in cases {
            let answers = AnswerSet::new().with(RISK_TOLERANCE, answer);
            assert_eq!(score(&answers).risk_score, expected, "answer={answer}");
        }
    }

    #[test]
    fn test_risk_tolerance_must_be_string() {
        let answers = AnswerSet::new().with(RISK_TOLERANCE, 0.8);
        assert_eq!(score(&answers).risk_score, 0.5);
    }

    #[test]
    fn test_personality_is_constant() {
        let answers = AnswerSet::new()
            .with(TOP_SKILLS, vec!["Leadership"])
            .with(CONSTRAINTS, vec!["No team available"]);
        assert_eq!(score(&answers).personality_score, NEUTRAL_PERSONALITY_SCORE);
        assert_eq!(
            score(&AnswerSet::new()).personality_score,
            NEUTRAL_PERSONALITY_SCORE
        );
    }

    #[test]
    fn test_empty_answers_give_full_neutral_vector() {
        let profile = score(&AnswerSet::new());
        assert_eq!(
            profile,
            ProfileVector {
                skill_score: 0.0,
                interest_score: 0.0,
                personality_score: 0.5,
                risk_score: 0.5,
                resource_score: 0.0,
            }
        );
    }
}
