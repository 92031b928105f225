//! Question catalog — the fixed, ordered questionnaire presented to users.
//!
//! Built once at startup and shared read-only. The option strings the scorer keys on
//! live here as constants so the catalog and the scoring tables cannot drift apart.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::quiz::value::{AnswerSet, DynamicValue};

// ────────────────────────────────────────────────────────────────────────────
// Field keys and scored option values
// ────────────────────────────────────────────────────────────────────────────

pub const PROFESSIONAL_BACKGROUND: &str = "professionalBackground";
pub const TOP_SKILLS: &str = "topSkills";
pub const EXPERIENCE_LEVEL: &str = "experienceLevel";
pub const INTERESTED_INDUSTRIES: &str = "interestedIndustries";
pub const CUSTOMER_TYPE: &str = "customerType";
pub const WORKING_STYLE: &str = "workingStyle";
pub const RISK_TOLERANCE: &str = "riskTolerance";
pub const AVAILABLE_HOURS: &str = "availableHours";
pub const INITIAL_BUDGET: &str = "initialBudget";
pub const CONSTRAINTS: &str = "constraints";

pub const RISK_LOW: &str = "Low (stable income priority)";
pub const RISK_MEDIUM: &str = "Medium (balanced)";
pub const RISK_HIGH: &str = "High (growth priority)";

/// Weekly hour buckets, lowest first.
pub const HOURS_OPTIONS: [&str; 4] = ["1-10 hours", "10-20 hours", "20-40 hours", "40+ hours"];

/// Startup budget buckets, lowest first.
pub const BUDGET_OPTIONS: [&str; 4] = ["$0-500", "$500-2000", "$2000-5000", "$5000+"];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

// Slider and FreeText have no question in the built-in catalog.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    SingleChoice,
    MultiChoice,
    Slider,
    FreeText,
}

impl InputKind {
    fn takes_options(self) -> bool {
        matches!(self, InputKind::SingleChoice | InputKind::MultiChoice)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSpec {
    pub text: String,
    pub input_kind: InputKind,
    pub options: Vec<String>,
    pub field_key: String,
}

impl QuestionSpec {
    pub fn new(text: &str, input_kind: InputKind, options: &[&str], field_key: &str) -> Self {
        Self {
            text: text.to_string(),
            input_kind,
            options: options.iter().map(|o| o.to_string()).collect(),
            field_key: field_key.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("question {index} has an empty field key")]
    EmptyFieldKey { index: usize },

    #[error("duplicate field key '{0}'")]
    DuplicateFieldKey(String),

    #[error("question '{0}' is a choice question with no options")]
    MissingOptions(String),

    #[error("question '{0}' is a slider or free-text question but lists options")]
    UnexpectedOptions(String),
}

/// A problem found when checking a submitted answer set against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerIssue {
    pub field_key: String,
    pub reason: String,
}

/// Immutable, ordered list of questions.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<QuestionSpec>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<QuestionSpec>) -> Result<Self, CatalogError> {
        validate_questions(&questions)?;
        Ok(Self { questions })
    }

    /// The built-in ten-question entrepreneur quiz, validated like any other catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        use InputKind::{MultiChoice, SingleChoice};

        let questions = vec![
            // Skills & experience
            QuestionSpec::new(
                "What's your primary professional background?",
                SingleChoice,
                &[
                    "Technology/Engineering",
                    "Business/Finance",
                    "Creative/Design",
                    "Marketing/Sales",
                    "Healthcare",
                    "Education",
                    "Other",
                ],
                PROFESSIONAL_BACKGROUND,
            ),
            QuestionSpec::new(
                "Select your top skills (choose up to 5):",
                MultiChoice,
                &[
                    "Leadership",
                    "Problem-solving",
                    "Communication",
                    "Technical",
                    "Data analysis",
                    "Project management",
                    "Sales",
                    "Writing",
                    "Design",
                    "Other",
                ],
                TOP_SKILLS,
            ),
            QuestionSpec::new(
                "Years of work experience?",
                SingleChoice,
                &["0-2 years", "2-5 years", "5-10 years", "10+ years"],
                EXPERIENCE_LEVEL,
            ),
            // Interests & industry
            QuestionSpec::new(
                "What industries interest you most? (select up to 3)",
                MultiChoice,
                &[
                    "Tech/Software",
                    "E-commerce",
                    "SaaS",
                    "Healthcare",
                    "Education",
                    "Finance",
                    "Sustainability",
                    "Entertainment",
                    "Real Estate",
                    "Food/Beverage",
                ],
                INTERESTED_INDUSTRIES,
            ),
            QuestionSpec::new(
                "What's your ideal customer?",
                SingleChoice,
                &[
                    "B2B (businesses)",
                    "B2C (consumers)",
                    "B2B2C (both)",
                    "Not sure yet",
                ],
                CUSTOMER_TYPE,
            ),
            // Working style
            QuestionSpec::new(
                "How do you prefer to work?",
                SingleChoice,
                &[
                    "Solo/independent",
                    "Small team",
                    "Collaborative/large team",
                    "Mixed",
                ],
                WORKING_STYLE,
            ),
            QuestionSpec::new(
                "What's your risk tolerance?",
                SingleChoice,
                &[RISK_LOW, RISK_MEDIUM, RISK_HIGH],
                RISK_TOLERANCE,
            ),
            // Resources
            QuestionSpec::new(
                "How many hours per week can you dedicate?",
                SingleChoice,
                &HOURS_OPTIONS,
                AVAILABLE_HOURS,
            ),
            QuestionSpec::new(
                "Initial budget for startup?",
                SingleChoice,
                &BUDGET_OPTIONS,
                INITIAL_BUDGET,
            ),
            // Constraints
            QuestionSpec::new(
                "Any constraints? (select all that apply)",
                MultiChoice,
                &[
                    "Location-dependent",
                    "Must keep current job",
                    "Limited tech skills",
                    "No team available",
                    "Regulatory concerns",
                ],
                CONSTRAINTS,
            ),
        ];

        Self::new(questions)
    }

    pub fn questions(&self) -> &[QuestionSpec] {
        &self.questions
    }

    pub fn get(&self, field_key: &str) -> Option<&QuestionSpec> {
        self.questions.iter().find(|q| q.field_key == field_key)
    }

    /// Checks each answer against the question it claims to answer.
    ///
    /// Reports unknown field keys and answers whose shape does not fit the input kind.
    /// Option membership is not enforced. Unanswered questions are fine.
    pub fn check_answers(&self, answers: &AnswerSet) -> Vec<AnswerIssue> {
        let mut issues = Vec::new();

        for (field_key, value) in answers.iter() {
            let Some(question) = self.get(field_key) else {
                issues.push(AnswerIssue {
                    field_key: field_key.clone(),
                    reason: "not a question in this quiz".to_string(),
                });
                continue;
            };

            let fits = match question.input_kind {
                InputKind::SingleChoice | InputKind::FreeText => value.as_str().is_some(),
                InputKind::MultiChoice => value
                    .as_list()
                    .map(|items| items.iter().all(|i| i.as_str().is_some()))
                    .unwrap_or(false),
                InputKind::Slider => value.as_f64().is_some(),
            };

            if !fits {
                issues.push(AnswerIssue {
                    field_key: field_key.clone(),
                    reason: format!(
                        "a {} answer does not fit a {:?} question",
                        value.kind(),
                        question.input_kind
                    ),
                });
            }
        }

        issues
    }
}

fn validate_questions(questions: &[QuestionSpec]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, question) in questions.iter().enumerate() {
        if question.field_key.trim().is_empty() {
            return Err(CatalogError::EmptyFieldKey { index });
        }
        if !seen.insert(question.field_key.as_str()) {
            return Err(CatalogError::DuplicateFieldKey(question.field_key.clone()));
        }
        match (question.input_kind.takes_options(), question.options.is_empty()) {
            (true, true) => return Err(CatalogError::MissingOptions(question.field_key.clone())),
            (false, false) => {
                return Err(CatalogError::UnexpectedOptions(question.field_key.clone()))
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let standard = QuestionCatalog::standard().unwrap();
        assert_eq!(standard.questions().len(), 10);
    }

    #[test]
    fn test_standard_catalog_order() {
        let catalog = QuestionCatalog::standard().unwrap();
        let keys: Vec<&str> = catalog
            .questions()
            .iter()
            .map(|q| q.field_key.as_str())
            .collect();
        assert_eq!(keys.first(), Some(&PROFESSIONAL_BACKGROUND));
        assert_eq!(keys.last(), Some(&CONSTRAINTS));
        assert_eq!(keys[7], AVAILABLE_HOURS);
    }

    #[test]
    fn test_scored_questions_use_shared_options() {
        let catalog = QuestionCatalog::standard().unwrap();
        assert_eq!(catalog.get(AVAILABLE_HOURS).unwrap().options, HOURS_OPTIONS);
        assert_eq!(catalog.get(INITIAL_BUDGET).unwrap().options, BUDGET_OPTIONS);
        assert_eq!(
            catalog.get(RISK_TOLERANCE).unwrap().options,
            [RISK_LOW, RISK_MEDIUM, RISK_HIGH]
        );
    }

    #[test]
    fn test_duplicate_field_key_rejected() {
        let err = QuestionCatalog::new(vec![
            QuestionSpec::new("A?", InputKind::FreeText, &[], "same"),
            QuestionSpec::new("B?", InputKind::FreeText, &[], "same"),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateFieldKey("same".to_string()));
    }

    #[test]
    fn test_option_rules_per_kind() {
        let missing = QuestionCatalog::new(vec![QuestionSpec::new(
            "Pick",
            InputKind::SingleChoice,
            &[],
            "pick",
        )]);
        assert_eq!(
            missing.unwrap_err(),
            CatalogError::MissingOptions("pick".to_string())
        );

        let unexpected = QuestionCatalog::new(vec![QuestionSpec::new(
            "How much?",
            InputKind::Slider,
            &["1"],
            "amount",
        )]);
        assert_eq!(
            unexpected.unwrap_err(),
            CatalogError::UnexpectedOptions("amount".to_string())
        );
    }

    #[test]
    fn test_empty_field_key_rejected() {
        let err = QuestionCatalog::new(vec![QuestionSpec::new(
            "Notes",
            InputKind::FreeText,
            &[],
            " ",
        )])
        .unwrap_err();
        assert_eq!(err, CatalogError::EmptyFieldKey { index: 0 });
    }

    #[test]
    fn test_check_answers_accepts_well_shaped_answers() {
        let catalog = QuestionCatalog::standard().unwrap();
        let answers = AnswerSet::new()
            .with(TOP_SKILLS, vec!["Sales", "Writing"])
            .with(RISK_TOLERANCE, RISK_HIGH);
        assert!(catalog.check_answers(&answers).is_empty());
    }

    #[test]
    fn test_check_answers_flags_unknown_and_misshapen() {
        let catalog = QuestionCatalog::standard().unwrap();
        let answers = AnswerSet::new()
            .with("favouriteColour", "blue")
            .with(TOP_SKILLS, "Sales")
            .with(CONSTRAINTS, DynamicValue::List(vec![DynamicValue::Integer(1)]));
        let issues = catalog.check_answers(&answers);
        let keys: Vec<&str> = issues.iter().map(|i| i.field_key.as_str()).collect();
        assert_eq!(keys, vec![CONSTRAINTS, "favouriteColour", TOP_SKILLS]);
    }

    #[test]
    fn test_slider_accepts_numbers() {
        let catalog = QuestionCatalog::new(vec![QuestionSpec::new(
            "Confidence?",
            InputKind::Slider,
            &[],
            "confidence",
        )])
        .unwrap();
        let ok = AnswerSet::new().with("confidence", 0.7);
        let bad = AnswerSet::new().with("confidence", "high");
        assert!(catalog.check_answers(&ok).is_empty());
        assert_eq!(catalog.check_answers(&bad).len(), 1);
    }
}
