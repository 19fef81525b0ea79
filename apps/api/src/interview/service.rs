//! Continue / Summarize — the two generation operations of an interview.
//!
//! Both are single attempts against the injected `GenerationService`; errors
//! are returned to the caller, which decides how they surface.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::interview::prompts::REVIEW_PROMPT_TEMPLATE;
use crate::interview::selector::select_system_prompt;
use crate::interview::session::{BackendError, InterviewBackend};
use crate::interview::transcript::{label_for_review, normalize};
use crate::llm_client::{GenerationService, LlmError};
use crate::models::Turn;

#[derive(Clone)]
pub struct InterviewService {
    llm: Arc<dyn GenerationService>,
}

impl InterviewService {
    pub fn new(llm: Arc<dyn GenerationService>) -> Self {
        Self { llm }
    }

    /// Produces the interviewer's next turn.
    pub async fn continue_interview(
        &self,
        role: &str,
        difficulty: &str,
        transcript: &[Turn],
    ) -> Result<String, LlmError> {
        let system = select_system_prompt(role, difficulty);
        let normalized = normalize(transcript);

        debug!(
            "Continuing {role}/{difficulty} interview with {} history turns",
            normalized.history.len()
        );

        self.llm
            .chat(system, &normalized.history, &normalized.current_input)
            .await
    }

    /// Produces the end-of-session review.
    pub async fn summarize(&self, role: &str, transcript: &[Turn]) -> Result<String, LlmError> {
        info!(
            "Generating review for {role} role with {} messages",
            transcript.len()
        );

        let prompt = build_review_prompt(role, transcript);
        let review = self.llm.generate(&prompt).await?;

        info!("Review generated successfully");
        Ok(review)
    }
}

/// Fills the review template with the role and the labeled transcript.
pub fn build_review_prompt(role: &str, transcript: &[Turn]) -> String {
    REVIEW_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{transcript}", &label_for_review(transcript))
}

/// In-process backend: drives a session directly against the generation
/// service, without the HTTP layer.
#[async_trait]
impl InterviewBackend for InterviewService {
    async fn reply(
        &self,
        role: &str,
        difficulty: &str,
        transcript: &[Turn],
    ) -> Result<String, BackendError> {
        self.continue_interview(role, difficulty, transcript)
            .await
            .map_err(|e| BackendError::Generation(e.to_string()))
    }

    async fn review(&self, role: &str, transcript: &[Turn]) -> Result<String, BackendError> {
        self.summarize(role, transcript)
            .await
            .map_err(|e| BackendError::Generation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::prompts::{BACKEND_HARD, FALLBACK_SYSTEM};
    use crate::llm_client::{ChatMessage, ChatRole};
    use crate::test_support::{FakeCall, FakeGeneration};

    #[tokio::test]
    async fn test_continue_sends_selected_prompt_history_and_input() {
        let fake = Arc::new(FakeGeneration::replying("next question"));
        let service = InterviewService::new(fake.clone());
        let transcript = vec![
            Turn::assistant("welcome"),
            Turn::user("ready"),
            Turn::assistant("q1"),
            Turn::user("a1"),
        ];

        let reply = service
            .continue_interview("Backend", "HARD", &transcript)
            .await
            .unwrap();
        assert_eq!(reply, "next question");

        let calls = fake.calls().await;
        assert_eq!(
            calls,
            vec![FakeCall::Chat {
                system: BACKEND_HARD.to_string(),
                history: vec![
                    ChatMessage {
                        role: ChatRole::User,
                        text: "ready".to_string()
                    },
                    ChatMessage {
                        role: ChatRole::Model,
                        text: "q1".to_string()
                    },
                ],
                input: "a1".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_continue_unknown_role_uses_fallback_prompt() {
        let fake = Arc::new(FakeGeneration::replying("ok"));
        let service = InterviewService::new(fake.clone());

        service
            .continue_interview("astronaut", "easy", &[Turn::user("hi")])
            .await
            .unwrap();

        match &fake.calls().await[0] {
            FakeCall::Chat { system, .. } => assert_eq!(system, FALLBACK_SYSTEM),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_continue_failure_is_returned_not_raised() {
        let service = InterviewService::new(Arc::new(FakeGeneration::failing()));
        let result = service
            .continue_interview("frontend", "easy", &[Turn::user("hi")])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_summarize_prompt_excludes_greeting_only() {
        let fake = Arc::new(FakeGeneration::replying("**Overall Assessment:**\n• Good"));
        let service = InterviewService::new(fake.clone());
        let transcript = vec![
            Turn::assistant("welcome"),
            Turn::user("hi"),
            Turn::assistant("q1"),
            Turn::user("a1"),
        ];

        let review = service.summarize("backend", &transcript).await.unwrap();
        assert!(review.contains("Overall Assessment"));

        let calls = fake.calls().await;
        let FakeCall::Generate { prompt } = &calls[0] else {
            panic!("expected a single-shot call");
        };
        assert!(prompt.contains("interview for a backend role"));
        assert!(prompt.contains("Candidate: hi\nInterviewer: q1\nCandidate: a1"));
        assert!(!prompt.contains("welcome"));
    }

    #[tokio::test]
    async fn test_backend_impl_maps_failure_to_generation_error() {
        let service = InterviewService::new(Arc::new(FakeGeneration::failing()));
        let err = service
            .review("devops", &[Turn::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Generation(_)));
    }
}
