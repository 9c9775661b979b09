//! Built-in prompt templates, one per generation task.
//!
//! Each template instructs the model on task semantics and defines, in prose
//! within the body, the exact JSON shape expected back. Placeholders use the
//! `{{key}}` form and are substituted with the JSON serialization of the
//! caller-supplied context.

/// Template for generating 3-5 business opportunities from a user profile.
pub const OPPORTUNITIES: &str = r#"
SYSTEM: You are NextWave Mentor, an AI engine that designs locally grounded business opportunities for African youth. Return JSON only.

INJECT: {{userProfile}}

TASK: Produce 3-5 realistic business opportunities executable within 90 days.

RETURN FORMAT:
{
 "opportunities":[
   {
     "id":"",
     "title":"",
     "description":"",
     "why_it_fits":"",
     "starting_capital_band":"",
     "earning_potential_band":"",
     "top_risks":["","",""],
     "example_mvp_steps":["","",""]
   }
 ]
}"#;

/// Template for the 13-week execution plan.
pub const PLAN: &str = r#"
SYSTEM: You are an execution engine. Return JSON only.

INJECT: {{userProfile}}, {{selectedIdea}}

TASK: Create a 90-day plan (13 weeks) with 3-7 tasks per week.
Each task must include title, detail, estimated_hours, difficulty(1-5), tag.

Format: { "weeks": [ { "weekNumber": 1, "tasks": [...] } ] }
"#;

/// Template for the concept-note document tree.
pub const CONCEPT_NOTE: &str = r#"
SYSTEM: Produce structured JSON optimized for PDF.

TASK:
{
 "pdf_title":"Business Concept Note",
 "sections":[
   {"heading":"Problem Overview","content":"..."},
   {"heading":"Proposed Solution","content":"..."},
   {"heading":"Target Customer","content":"..."},
   {"heading":"Value Proposition","content":"..."},
   {"heading":"Execution Approach","content":"..."},
   {"heading":"Key Metrics","content":"..."},
   {"heading":"Resource Requirements","content":"..."},
   {"heading":"Risks & Mitigation","content":"..."},
   {"heading":"Ask","content":"..."}
 ]
}"#;

/// Template for the 10-slide pitch outline.
pub const PITCH_OUTLINE: &str = r#"
SYSTEM: Output JSON for a 10-slide pitch deck.

TASK: Return:
{
 "slides":[
   {"title":"Problem","bullets":["",""]},
   {"title":"Solution","bullets":["",""]},
   {"title":"Market Opportunity","bullets":["",""]},
   {"title":"Product / Service","bullets":["",""]},
   {"title":"Business Model","bullets":["",""]},
   {"title":"Go-to-Market","bullets":["",""]},
   {"title":"90-Day Plan","bullets":["",""]},
   {"title":"Financial Snapshot","bullets":["",""]},
   {"title":"Risks","bullets":["",""]},
   {"title":"Why This Entrepreneur Will Win","bullets":["",""]}
 ]
}"#;

/// Template for the financial workbook.
///
/// The upstream product's template carried a trailing comma after the last
/// sheet key, which made the embedded JSON example malformed. Removed here so
/// the example the model imitates is itself valid JSON.
pub const FINANCIAL_SHEET: &str = r#"
SYSTEM: Output structured JSON for Excel.

TASK: Create:
{
 "sheets":{
   "Startup Costs":{"columns":["Item","Cost","Notes"],"rows":[]},
   "Unit Economics":{"columns":["Metric","Value"],"rows":[]},
   "6-Month Projection":{"columns":["Month","Revenue","Expenses","Profit"],"rows":[]},
   "Scenarios":{"columns":["Scenario","Revenue","Expenses","Profit"],"rows":[]}
 }
}"#;

/// Template for a topic-driven training lesson with quiz.
pub const TRAINING_LESSON: &str = r#"
SYSTEM: You are an expert entrepreneurial coach. Return JSON only.
TASK: Create a short, practical lesson on the topic: "{{topic}}".
The lesson should be easy to understand and actionable for a young entrepreneur.
Format:
{
  "title": "Lesson Title",
  "modules": [
    { "heading": "Section Heading", "body": "Content paragraph..." }
  ],
  "quiz": [
    { "question": "...", "options": ["A", "B", "C"], "correctAnswer": "A" }
  ]
}"#;

/// Template for one voice-mentor conversational turn. The running transcript
/// and the new user input are appended by the gateway.
pub const VOICE_REPLY: &str = r#"
SYSTEM: You are a conversational voice mentor. Speak simply and clearly. Return JSON only.

TASK: Return:
{
 "replyText":"...",
 "followUpQuestion":"...",
 "sessionSummary":"..."
}"#;
