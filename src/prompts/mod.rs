//! Prompt templates and placeholder substitution for the mentor gateway.
//!
//! Templates are static strings keyed by task, not a templating engine.
//! Substitution is a single replace pass per distinct `{{key}}`,
//! order-independent, with no escaping beyond what JSON serialization
//! already guarantees. The registry resolves each task key to its active
//! template text and supports installing a versioned override per key.

pub mod templates;

use std::collections::HashMap;

use serde::Serialize;

use crate::model::PromptPack;

/// Names the fixed set of generation tasks, one template each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    Opportunities,
    Plan,
    ConceptNote,
    PitchOutline,
    FinancialSheet,
    TrainingLesson,
    VoiceReply,
}

impl PromptKey {
    /// Returns all task keys.
    pub fn all() -> [PromptKey; 7] {
        [
            PromptKey::Opportunities,
            PromptKey::Plan,
            PromptKey::ConceptNote,
            PromptKey::PitchOutline,
            PromptKey::FinancialSheet,
            PromptKey::TrainingLesson,
            PromptKey::VoiceReply,
        ]
    }

    /// Stable string label, used in prompt-pack records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKey::Opportunities => "generateOpportunities",
            PromptKey::Plan => "generatePlan",
            PromptKey::ConceptNote => "generateConceptNote",
            PromptKey::PitchOutline => "generatePitchOutline",
            PromptKey::FinancialSheet => "generateFinancialSheet",
            PromptKey::TrainingLesson => "generateTrainingLesson",
            PromptKey::VoiceReply => "voiceChatHandlerPrompt",
        }
    }

    /// Parses a prompt-pack key label back into a task key.
    pub fn parse(label: &str) -> Option<PromptKey> {
        PromptKey::all().into_iter().find(|k| k.as_str() == label)
    }

    /// The built-in template for this task.
    pub fn default_template(&self) -> &'static str {
        match self {
            PromptKey::Opportunities => templates::OPPORTUNITIES,
            PromptKey::Plan => templates::PLAN,
            PromptKey::ConceptNote => templates::CONCEPT_NOTE,
            PromptKey::PitchOutline => templates::PITCH_OUTLINE,
            PromptKey::FinancialSheet => templates::FINANCIAL_SHEET,
            PromptKey::TrainingLesson => templates::TRAINING_LESSON,
            PromptKey::VoiceReply => templates::VOICE_REPLY,
        }
    }
}

impl std::fmt::Display for PromptKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves task keys to active template text.
///
/// Without overrides every key resolves to its built-in template. Installing
/// an active [`PromptPack`] replaces the text for that key until the override
/// is cleared.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    overrides: HashMap<PromptKey, PromptPack>,
}

impl PromptRegistry {
    /// Registry with only the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active template text for a task.
    pub fn template(&self, key: PromptKey) -> &str {
        self.overrides
            .get(&key)
            .filter(|pack| pack.active)
            .map(|pack| pack.template.as_str())
            .unwrap_or_else(|| key.default_template())
    }

    /// Installs a prompt-pack override. Packs with an unrecognized key are
    /// rejected; inactive packs are stored but not served.
    pub fn install(&mut self, pack: PromptPack) -> Result<(), String> {
        let key = PromptKey::parse(&pack.key)
            .ok_or_else(|| format!("Unknown prompt key '{}'", pack.key))?;
        if let Some(existing) = self.overrides.get(&key) {
            if existing.version > pack.version {
                return Err(format!(
                    "Prompt pack for '{}' is older than installed version {}",
                    pack.key, existing.version
                ));
            }
        }
        self.overrides.insert(key, pack);
        Ok(())
    }

    /// Reverts a task to its built-in template.
    pub fn clear(&mut self, key: PromptKey) {
        self.overrides.remove(&key);
    }
}

/// Substitutes each named `{{key}}` placeholder in the template with the JSON
/// serialization of the corresponding value.
///
/// Every occurrence of a supplied key is replaced; unknown placeholders in
/// the template are left untouched for the caller to detect.
pub fn interpolate<T: Serialize>(template: &str, context: &[(&str, &T)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in context {
        let token = format!("{{{{{name}}}}}");
        let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
        rendered = rendered.replace(&token, &json);
    }
    rendered
}

/// Substitutes pre-serialized JSON values, for contexts of mixed types.
pub fn interpolate_values(template: &str, context: &[(&str, serde_json::Value)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in context {
        let token = format!("{{{{{name}}}}}");
        rendered = rendered.replace(&token, &value.to_string());
    }
    rendered
}
