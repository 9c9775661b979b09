//! Data-transfer shapes produced by the prompt gateway and persisted by the
//! store clients.
//!
//! Field names follow the wire contract the prompt templates promise, so a
//! parsed response round-trips with no renaming. Shapes carry no identity or
//! mutation contract beyond "replace wholesale".

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Profile captured during onboarding and persisted to the document store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub uid: String,
    pub name: String,
    pub location: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Discrete budget band label (e.g. "100-500"), never a precise number.
    pub budget: String,
    /// Topic labels of completed training lessons.
    #[serde(rename = "completedLessons", default, skip_serializing_if = "Vec::is_empty")]
    pub completed_lessons: Vec<String>,
}

/// A generated business idea. Immutable once generated; selecting one makes
/// it the context for downstream generation calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub why_it_fits: String,
    pub starting_capital_band: String,
    pub earning_potential_band: String,
    pub top_risks: Vec<String>,
    pub example_mvp_steps: Vec<String>,
}

/// A single task within a week of the 90-day plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTask {
    pub title: String,
    pub detail: String,
    pub estimated_hours: f64,
    /// 1 (easiest) to 5 (hardest).
    pub difficulty: u8,
    pub tag: String,
}

/// One week of the 90-day plan, carrying 3-7 tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekPlan {
    #[serde(rename = "weekNumber")]
    pub week_number: u32,
    pub tasks: Vec<PlanTask>,
}

/// A 13-week execution plan, generated once per selected opportunity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub weeks: Vec<WeekPlan>,
}

/// A heading/content section of a concept note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdfSection {
    pub heading: String,
    pub content: String,
}

/// Concept-note document tree, rendered downstream as a PDF.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdfDoc {
    pub pdf_title: String,
    pub sections: Vec<PdfSection>,
}

/// One slide of a pitch outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
}

/// Ten-slide pitch outline, rendered downstream as a slide deck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitchDeck {
    pub slides: Vec<Slide>,
}

/// A spreadsheet cell: either text or a number, matching what the model
/// emits for financial rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

/// A named sheet of the financial workbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Financial workbook, rendered downstream as a spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workbook {
    pub sheets: BTreeMap<String, Sheet>,
}

/// An instructional section of a training lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonModule {
    pub heading: String,
    pub body: String,
}

/// A quiz question; the correct answer must be one of the options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// A generated training lesson. The id and topic are stamped locally; the
/// rest comes from the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingLesson {
    pub id: String,
    pub topic: String,
    pub title: String,
    pub modules: Vec<LessonModule>,
    pub quiz: Vec<QuizItem>,
}

/// Who spoke a voice utterance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    User,
    Assistant,
}

impl SpeakerRole {
    /// Wire label used when rendering a transcript into a prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakerRole::User => "user",
            SpeakerRole::Assistant => "assistant",
        }
    }
}

/// A role-tagged utterance with a millisecond epoch timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceUtterance {
    pub role: SpeakerRole,
    pub text: String,
    pub timestamp: i64,
}

impl VoiceUtterance {
    /// Create an utterance stamped with the current time.
    pub fn now(role: SpeakerRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// The mentor's reply to a voice turn. The summary is only present when the
/// model chooses to provide one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceReply {
    #[serde(rename = "replyText")]
    pub reply_text: String,
    #[serde(rename = "followUpQuestion")]
    pub follow_up_question: String,
    #[serde(rename = "sessionSummary", default, skip_serializing_if = "Option::is_none")]
    pub session_summary: Option<String>,
}

/// An ordered voice transcript persisted as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceSession {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub transcript: Vec<VoiceUtterance>,
}

/// A versioned prompt-template override, installable into the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptPack {
    pub id: String,
    pub key: String,
    pub template: String,
    pub version: u32,
    pub active: bool,
}
