//! The prompt gateway: typed generation requests in, typed results out.
//!
//! Each operation resolves the task's template, substitutes the caller's
//! context, issues one fire-once request to the generation endpoint with a
//! JSON-only system instruction, and parses the returned text into the
//! task's shape. Empty responses and contract mismatches become typed
//! failures; there is no retry, no caching and no session state inside the
//! gateway itself.

pub mod task;

pub use task::{spawn_generation, GenerationHandle};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::contract::ResponseContract;
use crate::error::GatewayError;
use crate::extract::extract_json;
use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::model::{
    LessonModule, Opportunity, PdfDoc, PitchDeck, Plan, QuizItem, TrainingLesson, UserProfile,
    VoiceReply, VoiceUtterance, Workbook,
};
use crate::prompts::{interpolate, interpolate_values, PromptKey, PromptRegistry};

/// System instruction reinforcing the JSON response contract.
const JSON_ONLY_SYSTEM: &str = "Return valid JSON matching the format.";

/// Sampling temperature used for every generation call.
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Gateway between screens and the generation endpoint.
pub struct PromptGateway {
    provider: Arc<dyn LlmProvider>,
    registry: PromptRegistry,
    /// Model identifier; empty defers to the client default.
    model: String,
    temperature: f64,
}

impl std::fmt::Debug for PromptGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptGateway")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

/// Envelope the opportunities template asks the model to return.
#[derive(Debug, Deserialize)]
struct OpportunitiesEnvelope {
    opportunities: Vec<Opportunity>,
}

impl ResponseContract for OpportunitiesEnvelope {
    fn check(&self) -> Result<(), String> {
        if self.opportunities.is_empty() {
            return Err("no opportunities returned".to_string());
        }
        for opportunity in &self.opportunities {
            opportunity.check()?;
        }
        Ok(())
    }
}

/// Body of a training lesson as the model returns it; id and topic are
/// stamped locally.
#[derive(Debug, Deserialize)]
struct LessonPayload {
    title: String,
    modules: Vec<LessonModule>,
    quiz: Vec<QuizItem>,
}

impl ResponseContract for LessonPayload {
    fn check(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("lesson title is empty".to_string());
        }
        if self.modules.is_empty() {
            return Err("lesson has no modules".to_string());
        }
        for item in &self.quiz {
            item.check()?;
        }
        Ok(())
    }
}

impl PromptGateway {
    /// Creates a gateway over the given provider with built-in templates.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            registry: PromptRegistry::new(),
            model: String::new(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Overrides the model named in every request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Uses a registry with installed prompt-pack overrides.
    pub fn with_registry(mut self, registry: PromptRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Generates 3-5 business opportunities for a profile.
    pub async fn generate_opportunities(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<Opportunity>, GatewayError> {
        let template = self.registry.template(PromptKey::Opportunities);
        let prompt = interpolate(template, &[("userProfile", profile)]);
        let text = self.complete(prompt).await?;
        let envelope: OpportunitiesEnvelope = parse_contract(&text)?;
        Ok(envelope.opportunities)
    }

    /// Generates the 13-week execution plan for a selected opportunity.
    pub async fn generate_plan(
        &self,
        profile: &UserProfile,
        selected_idea: &Opportunity,
    ) -> Result<Plan, GatewayError> {
        let template = self.registry.template(PromptKey::Plan);
        let prompt = interpolate_values(
            template,
            &[
                ("userProfile", serde_json::to_value(profile).unwrap_or_default()),
                (
                    "selectedIdea",
                    serde_json::to_value(selected_idea).unwrap_or_default(),
                ),
            ],
        );
        let text = self.complete(prompt).await?;
        parse_contract(&text)
    }

    /// Generates the concept-note document tree for an idea.
    pub async fn generate_concept_note(
        &self,
        idea: &Opportunity,
    ) -> Result<PdfDoc, GatewayError> {
        let prompt = self.document_prompt(PromptKey::ConceptNote, idea);
        let text = self.complete(prompt).await?;
        parse_contract(&text)
    }

    /// Generates the 10-slide pitch outline for an idea.
    pub async fn generate_pitch_deck(
        &self,
        idea: &Opportunity,
    ) -> Result<PitchDeck, GatewayError> {
        let prompt = self.document_prompt(PromptKey::PitchOutline, idea);
        let text = self.complete(prompt).await?;
        parse_contract(&text)
    }

    /// Generates the financial workbook for an idea.
    pub async fn generate_financials(
        &self,
        idea: &Opportunity,
    ) -> Result<Workbook, GatewayError> {
        let prompt = self.document_prompt(PromptKey::FinancialSheet, idea);
        let text = self.complete(prompt).await?;
        parse_contract(&text)
    }

    /// Generates a training lesson for a topic, stamping id and topic locally.
    pub async fn generate_training_lesson(
        &self,
        topic: &str,
    ) -> Result<TrainingLesson, GatewayError> {
        let template = self.registry.template(PromptKey::TrainingLesson);
        let prompt = interpolate(template, &[("topic", &topic)]);
        let text = self.complete(prompt).await?;
        let payload: LessonPayload = parse_contract(&text)?;
        Ok(TrainingLesson {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            title: payload.title,
            modules: payload.modules,
            quiz: payload.quiz,
        })
    }

    /// Produces the mentor's reply for one voice turn. The full transcript is
    /// passed in by the caller on every call; the gateway holds no session
    /// state.
    pub async fn voice_reply(
        &self,
        history: &[VoiceUtterance],
        last_input: &str,
    ) -> Result<VoiceReply, GatewayError> {
        let template = self.registry.template(PromptKey::VoiceReply);
        let conversation = history
            .iter()
            .map(|u| format!("{}: {}", u.role.as_str(), u.text))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = format!(
            "{}\n\nHISTORY:\n{}\n\nUSER INPUT: {}",
            template, conversation, last_input
        );
        let text = self.complete(prompt).await?;
        parse_contract(&text)
    }

    /// Static template plus appended idea context, for the document tasks
    /// whose templates carry no placeholders.
    fn document_prompt(&self, key: PromptKey, idea: &Opportunity) -> String {
        let template = self.registry.template(key);
        let context = serde_json::to_string(idea).unwrap_or_else(|_| "null".to_string());
        format!("{}\n\nCONTEXT: {}", template, context)
    }

    /// One fire-once round trip: request, empty check, raw text out.
    async fn complete(&self, prompt: String) -> Result<String, GatewayError> {
        let request = GenerationRequest::new(
            self.model.clone(),
            vec![Message::system(JSON_ONLY_SYSTEM), Message::user(prompt)],
        )
        .with_temperature(self.temperature)
        .with_json_response();

        let response = self.provider.generate(request).await?;
        let content = response.first_content().ok_or(GatewayError::EmptyResponse)?;
        if content.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

/// Parses response text strictly as JSON into the task's shape, then runs
/// its contract check. Parser errors never escape untranslated.
fn parse_contract<T>(text: &str) -> Result<T, GatewayError>
where
    T: DeserializeOwned + ResponseContract,
{
    let json = extract_json(text).ok_or_else(|| {
        GatewayError::ContractViolation("response contains no JSON".to_string())
    })?;
    let value: T = serde_json::from_str(&json)
        .map_err(|e| GatewayError::ContractViolation(e.to_string()))?;
    value
        .check()
        .map_err(GatewayError::ContractViolation)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::{Choice, GenerationResponse, Usage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider returning canned content and recording the assembled prompt.
    struct MockProvider {
        content: String,
        last_prompt: Mutex<Option<String>>,
    }

    impl MockProvider {
        fn returning(content: &str) -> Arc<Self> {
            Arc::new(Self {
                content: content.to_string(),
                last_prompt: Mutex::new(None),
            })
        }

        fn prompt(&self) -> String {
            self.last_prompt
                .lock()
                .expect("lock poisoned")
                .clone()
                .expect("no request captured")
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> Result<GenerationResponse, LlmError> {
            let user_prompt = request
                .messages
                .iter()
                .find(|m| m.role == "user")
                .map(|m| m.content.clone())
                .unwrap_or_default();
            *self.last_prompt.lock().expect("lock poisoned") = Some(user_prompt);

            Ok(GenerationResponse {
                id: "mock".to_string(),
                model: request.model,
                choices: vec![Choice {
                    index: 0,
                    message: Message::assistant(self.content.clone()),
                    finish_reason: "stop".to_string(),
                }],
                usage: Usage {
                    prompt_tokens: 0,
                    completion_tokens: 0,
                    total_tokens: 0,
                },
            })
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            uid: "u1".to_string(),
            name: "Amara".to_string(),
            location: "Lagos, Nigeria".to_string(),
            skills: vec!["sales".to_string()],
            interests: vec![],
            budget: "100-500".to_string(),
            completed_lessons: vec![],
        }
    }

    #[tokio::test]
    async fn empty_response_is_detected_before_parsing() {
        let provider = MockProvider::returning("");
        let gateway = PromptGateway::new(provider);
        let err = gateway
            .generate_opportunities(&profile())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_json_response_is_a_contract_violation() {
        let provider = MockProvider::returning("not json");
        let gateway = PromptGateway::new(provider);
        let err = gateway
            .generate_opportunities(&profile())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ContractViolation(_)));
    }

    #[tokio::test]
    async fn prompt_carries_serialized_profile() {
        let provider = MockProvider::returning(r#"{"opportunities":[]}"#);
        let gateway = PromptGateway::new(provider.clone());
        let _ = gateway.generate_opportunities(&profile()).await;

        let prompt = provider.prompt();
        let serialized = serde_json::to_string(&profile()).expect("should serialize");
        assert!(prompt.contains(&serialized));
        assert!(!prompt.contains("{{userProfile}}"));
    }

    #[tokio::test]
    async fn empty_opportunity_list_violates_contract() {
        let provider = MockProvider::returning(r#"{"opportunities":[]}"#);
        let gateway = PromptGateway::new(provider);
        let err = gateway
            .generate_opportunities(&profile())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ContractViolation(_)));
    }

    #[tokio::test]
    async fn lesson_is_stamped_with_id_and_topic() {
        let provider = MockProvider::returning(
            r#"{"title":"Pricing Basics","modules":[{"heading":"Why price matters","body":"..."}],"quiz":[{"question":"Pick","options":["A","B"],"correctAnswer":"A"}]}"#,
        );
        let gateway = PromptGateway::new(provider);
        let lesson = gateway
            .generate_training_lesson("pricing")
            .await
            .expect("lesson should generate");
        assert_eq!(lesson.topic, "pricing");
        assert!(!lesson.id.is_empty());
        assert_eq!(lesson.title, "Pricing Basics");
    }

    #[tokio::test]
    async fn voice_prompt_renders_history_and_input() {
        let provider =
            MockProvider::returning(r#"{"replyText":"Hi","followUpQuestion":"Budget?"}"#);
        let gateway = PromptGateway::new(provider.clone());
        let history = vec![
            VoiceUtterance::now(crate::model::SpeakerRole::User, "I want to start a kiosk"),
            VoiceUtterance::now(crate::model::SpeakerRole::Assistant, "Tell me more"),
        ];
        let reply = gateway
            .voice_reply(&history, "How much do I need?")
            .await
            .expect("reply should generate");
        assert_eq!(reply.reply_text, "Hi");
        assert_eq!(reply.session_summary, None);

        let prompt = provider.prompt();
        assert!(prompt.contains("HISTORY:\nuser: I want to start a kiosk\nassistant: Tell me more"));
        assert!(prompt.contains("USER INPUT: How much do I need?"));
    }

    #[tokio::test]
    async fn upstream_errors_propagate_unchanged() {
        struct FailingProvider;

        #[async_trait]
        impl LlmProvider for FailingProvider {
            async fn generate(
                &self,
                _request: GenerationRequest,
            ) -> Result<GenerationResponse, LlmError> {
                Err(LlmError::ApiError {
                    code: 503,
                    message: "quota exhausted".to_string(),
                })
            }
        }

        let gateway = PromptGateway::new(Arc::new(FailingProvider));
        let err = gateway
            .generate_opportunities(&profile())
            .await
            .unwrap_err();
        match err {
            GatewayError::Upstream(LlmError::ApiError { code, message }) => {
                assert_eq!(code, 503);
                assert_eq!(message, "quota exhausted");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
