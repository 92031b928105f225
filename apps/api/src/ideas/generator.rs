//! Idea generation — orchestrates one submission end to end.
//!
//! Flow: build_idea_prompt → TextGenerator (one call, no retry) → parse_ideas →
//!       assemble_idea per draft.
//!
//! Callers get either the full list (possibly empty) or one `LlmError`.

use std::sync::Arc;

use tracing::info;

use crate::ideas::assembler::assemble_idea;
use crate::ideas::parser::parse_ideas;
use crate::ideas::prompts::build_idea_prompt;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::idea::GeneratedIdea;
use crate::models::quiz::ProfileVector;
use crate::models::user::UserProfile;

/// Owner id used when the user profile carries no id.
pub const UNKNOWN_USER_ID: &str = "unknown";

#[derive(Clone)]
pub struct IdeaGenerator {
    llm: Arc<dyn TextGenerator>,
}

impl IdeaGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    pub async fn generate(
        &self,
        profile: &ProfileVector,
        user: &UserProfile,
    ) -> Result<Vec<GeneratedIdea>, LlmError> {
        let user_id = user.id.as_deref().unwrap_or(UNKNOWN_USER_ID);
        let prompt = build_idea_prompt(profile, user);

        info!("Requesting business ideas for user {user_id}");
        let raw_text = self.llm.generate_text(&prompt).await?;

        let ideas: Vec<GeneratedIdea> = parse_ideas(&raw_text)?
            .into_iter()
            .map(|draft| assemble_idea(draft, user_id))
            .collect();

        info!("Generated {} business ideas for user {user_id}", ideas.len());
        Ok(ideas)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Canned transport that records every prompt it receives.
    pub(crate) struct FakeTextGenerator {
        response: Result<String, fn() -> LlmError>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl FakeTextGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(error: fn() -> LlmError) -> Self {
            Self {
                response: Err(error),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeTextGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(make_error) => Err(make_error()),
            }
        }
    }

    fn profile() -> ProfileVector {
        ProfileVector::new(0.6, 0.5, 0.5, 0.8, 1.0)
    }

    fn user(id: Option<&str>) -> UserProfile {
        UserProfile {
            id: id.map(String::from),
            skillsets: vec!["Design".to_string()],
            risk_tolerance: "high".to_string(),
            ..UserProfile::default()
        }
    }

    #[tokio::test]
    async fn test_generate_assembles_every_draft() {
        let fake = Arc::new(FakeTextGenerator::replying(
            "```json\n[{\"title\": \"Print Shop\", \"roughTimelineWeeks\": 5}, {\"summary\": \"s\"}, 7]\n```",
        ));
        let generator = IdeaGenerator::new(fake.clone());

        let ideas = generator.generate(&profile(), &user(Some("user-9"))).await.unwrap();

        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].title, "Print Shop");
        assert_eq!(ideas[0].rough_timeline_weeks, 5);
        assert_eq!(ideas[1].title, "Untitled");
        assert!(ideas.iter().all(|i| i.user_id == "user-9"));
    }

    #[tokio::test]
    async fn test_generate_sends_built_prompt_once() {
        let fake = Arc::new(FakeTextGenerator::replying("[]"));
        let generator = IdeaGenerator::new(fake.clone());

        let ideas = generator.generate(&profile(), &user(None)).await.unwrap();
        assert!(ideas.is_empty());

        let prompts = fake.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_idea_prompt(&profile(), &user(None)));
    }

    #[tokio::test]
    async fn test_missing_user_id_falls_back_to_unknown() {
        let fake = Arc::new(FakeTextGenerator::replying(r#"[{"title": "x"}]"#));
        let ideas = IdeaGenerator::new(fake)
            .generate(&profile(), &user(None))
            .await
            .unwrap();
        assert_eq!(ideas[0].user_id, UNKNOWN_USER_ID);
    }

    #[tokio::test]
    async fn test_undecodable_output_yields_no_ideas() {
        let fake = Arc::new(FakeTextGenerator::replying("not json at all"));
        let result = IdeaGenerator::new(fake)
            .generate(&profile(), &user(Some("u")))
            .await;
        assert!(matches!(result, Err(LlmError::Decoding(_))));
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let fake = Arc::new(FakeTextGenerator::failing(|| LlmError::NoValidResponse));
        let result = IdeaGenerator::new(fake)
            .generate(&profile(), &user(Some("u")))
            .await;
        assert!(matches!(result, Err(LlmError::NoValidResponse)));
    }
}
