//! Contract tests for the prompt gateway against a mock provider.
//!
//! Each test fixes the endpoint's response and checks that the gateway
//! returns the documented shape unchanged, or fails with the documented
//! error class.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nextwave_mentor::error::{GatewayError, LlmError};
use nextwave_mentor::gateway::{spawn_generation, PromptGateway};
use nextwave_mentor::llm::{
    Choice, GenerationRequest, GenerationResponse, LlmProvider, Message, Usage,
};
use nextwave_mentor::model::{Opportunity, SpeakerRole, UserProfile, VoiceUtterance};

/// Provider that replays a fixed response and records each request.
struct MockProvider {
    content: String,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockProvider {
    fn returning(content: &str) -> Arc<Self> {
        Arc::new(Self {
            content: content.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn last_user_prompt(&self) -> String {
        let requests = self.requests.lock().expect("lock poisoned");
        requests
            .last()
            .and_then(|r| r.messages.iter().find(|m| m.role == "user"))
            .map(|m| m.content.clone())
            .expect("no request captured")
    }

    fn last_system_instruction(&self) -> String {
        let requests = self.requests.lock().expect("lock poisoned");
        requests
            .last()
            .and_then(|r| r.messages.iter().find(|m| m.role == "system"))
            .map(|m| m.content.clone())
            .expect("no request captured")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, LlmError> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
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

fn amara() -> UserProfile {
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

fn kiosk() -> Opportunity {
    Opportunity {
        id: "1".to_string(),
        title: "Mobile Phone Accessories Kiosk".to_string(),
        description: "Sell phone accessories at a market stall".to_string(),
        why_it_fits: "Builds on sales experience".to_string(),
        starting_capital_band: "100-500".to_string(),
        earning_potential_band: "200-600/mo".to_string(),
        top_risks: vec!["competition".to_string()],
        example_mvp_steps: vec!["source suppliers".to_string()],
    }
}

const OPPORTUNITIES_RESPONSE: &str = r#"{"opportunities":[{"id":"1","title":"Mobile Phone Accessories Kiosk","description":"Sell phone accessories at a market stall","why_it_fits":"Builds on sales experience","starting_capital_band":"100-500","earning_potential_band":"200-600/mo","top_risks":["competition"],"example_mvp_steps":["source suppliers"]}]}"#;

#[tokio::test]
async fn opportunities_round_trip_without_field_loss() {
    let provider = MockProvider::returning(OPPORTUNITIES_RESPONSE);
    let gateway = PromptGateway::new(provider.clone());

    let opportunities = gateway
        .generate_opportunities(&amara())
        .await
        .expect("should generate");

    assert_eq!(opportunities, vec![kiosk()]);
    // Every call carries the JSON-only system instruction.
    assert!(provider.last_system_instruction().contains("JSON"));
}

#[tokio::test]
async fn plan_preserves_numeric_fields_as_numbers() {
    let provider = MockProvider::returning(
        r#"{"weeks":[{"weekNumber":1,"tasks":[{"title":"Market research","detail":"Talk to customers","estimated_hours":5,"difficulty":2,"tag":"research"}]}]}"#,
    );
    let gateway = PromptGateway::new(provider.clone());

    let plan = gateway
        .generate_plan(&amara(), &kiosk())
        .await
        .expect("should generate");

    assert_eq!(plan.weeks.len(), 1);
    let week = &plan.weeks[0];
    assert_eq!(week.week_number, 1);
    assert_eq!(week.tasks.len(), 1);
    let task = &week.tasks[0];
    assert_eq!(task.estimated_hours, 5.0);
    assert_eq!(task.difficulty, 2);

    // Both context values were substituted.
    let prompt = provider.last_user_prompt();
    assert!(!prompt.contains("{{userProfile}}"));
    assert!(!prompt.contains("{{selectedIdea}}"));
    assert!(prompt.contains("Mobile Phone Accessories Kiosk"));
}

#[tokio::test]
async fn malformed_response_fails_with_contract_violation() {
    let provider = MockProvider::returning("not json");
    let gateway = PromptGateway::new(provider);

    let err = gateway.generate_plan(&amara(), &kiosk()).await.unwrap_err();
    assert!(matches!(err, GatewayError::ContractViolation(_)));
}

#[tokio::test]
async fn empty_response_fails_before_parsing() {
    let provider = MockProvider::returning("   ");
    let gateway = PromptGateway::new(provider);

    let err = gateway
        .generate_opportunities(&amara())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::EmptyResponse));
}

#[tokio::test]
async fn voice_reply_returns_all_fields_when_summary_present() {
    let provider = MockProvider::returning(
        r#"{"replyText":"Great question!","followUpQuestion":"What's your budget?","sessionSummary":"Discussed budget"}"#,
    );
    let gateway = PromptGateway::new(provider);

    let history = vec![VoiceUtterance::now(SpeakerRole::User, "How do I start?")];
    let reply = gateway
        .voice_reply(&history, "How do I start?")
        .await
        .expect("should generate");

    assert_eq!(reply.reply_text, "Great question!");
    assert_eq!(reply.follow_up_question, "What's your budget?");
    assert_eq!(reply.session_summary.as_deref(), Some("Discussed budget"));
}

#[tokio::test]
async fn voice_reply_tolerates_absent_summary() {
    let provider = MockProvider::returning(
        r#"{"replyText":"Great question!","followUpQuestion":"What's your budget?"}"#,
    );
    let gateway = PromptGateway::new(provider);

    let reply = gateway
        .voice_reply(&[], "How do I start?")
        .await
        .expect("should generate");
    assert_eq!(reply.session_summary, None);
}

#[tokio::test]
async fn concept_note_round_trips_document_tree() {
    let provider = MockProvider::returning(
        r#"{"pdf_title":"Business Concept Note","sections":[{"heading":"Problem Overview","content":"Phone users lack accessories"},{"heading":"Ask","content":"$300 starting capital"}]}"#,
    );
    let gateway = PromptGateway::new(provider.clone());

    let doc = gateway
        .generate_concept_note(&kiosk())
        .await
        .expect("should generate");
    assert_eq!(doc.pdf_title, "Business Concept Note");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[1].heading, "Ask");

    // Document prompts append the selected idea as context.
    let prompt = provider.last_user_prompt();
    assert!(prompt.contains("CONTEXT:"));
    assert!(prompt.contains("Mobile Phone Accessories Kiosk"));
}

#[tokio::test]
async fn financials_parse_mixed_cell_types() {
    let provider = MockProvider::returning(
        r#"{"sheets":{"Startup Costs":{"columns":["Item","Cost","Notes"],"rows":[["Stock",250,"initial inventory"]]}}}"#,
    );
    let gateway = PromptGateway::new(provider);

    let workbook = gateway
        .generate_financials(&kiosk())
        .await
        .expect("should generate");
    let sheet = workbook
        .sheets
        .get("Startup Costs")
        .expect("sheet present");
    assert_eq!(sheet.columns, vec!["Item", "Cost", "Notes"]);
    assert_eq!(sheet.rows.len(), 1);
}

#[tokio::test]
async fn fenced_json_is_still_accepted() {
    let provider = MockProvider::returning(
        "```json\n{\"replyText\":\"Hi\",\"followUpQuestion\":\"Budget?\"}\n```",
    );
    let gateway = PromptGateway::new(provider);

    let reply = gateway
        .voice_reply(&[], "hello")
        .await
        .expect("should generate");
    assert_eq!(reply.reply_text, "Hi");
}

#[tokio::test]
async fn superseded_request_can_be_aborted() {
    let provider = MockProvider::returning(OPPORTUNITIES_RESPONSE);
    let gateway = Arc::new(PromptGateway::new(provider));

    let stale = {
        let gateway = gateway.clone();
        spawn_generation(async move {
            // Hold the task open so the abort lands before completion.
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            gateway.generate_opportunities(&amara()).await
        })
    };
    let fresh = {
        let gateway = gateway.clone();
        spawn_generation(async move { gateway.generate_opportunities(&amara()).await })
    };

    stale.abort();
    assert!(matches!(
        stale.join().await.unwrap_err(),
        GatewayError::Cancelled
    ));
    let opportunities = fresh.join().await.expect("fresh request unaffected");
    assert_eq!(opportunities.len(), 1);
}
