//! Shape checks applied to parsed model responses.
//!
//! Parsing alone only proves the text was JSON; these checks prove the JSON
//! carries the fields the template promised, so a mismatch surfaces as a
//! contract violation at the gateway instead of an undefined value downstream.

use crate::model::{
    Opportunity, PdfDoc, PitchDeck, Plan, QuizItem, VoiceReply, Workbook,
};

/// A response shape that can vouch for its own contract.
pub trait ResponseContract {
    /// Returns the first violated constraint, if any.
    fn check(&self) -> Result<(), String>;
}

impl ResponseContract for Opportunity {
    fn check(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("opportunity title is empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err(format!("opportunity '{}' has no description", self.title));
        }
        Ok(())
    }
}

impl ResponseContract for Plan {
    fn check(&self) -> Result<(), String> {
        if self.weeks.is_empty() {
            return Err("plan has no weeks".to_string());
        }
        for week in &self.weeks {
            if week.week_number == 0 {
                return Err("week number must be 1 or greater".to_string());
            }
            if week.tasks.is_empty() {
                return Err(format!("week {} has no tasks", week.week_number));
            }
            for task in &week.tasks {
                if task.title.trim().is_empty() {
                    return Err(format!("week {} has an untitled task", week.week_number));
                }
                if !(1..=5).contains(&task.difficulty) {
                    return Err(format!(
                        "task '{}' difficulty {} outside 1-5",
                        task.title, task.difficulty
                    ));
                }
            }
        }
        Ok(())
    }
}

impl ResponseContract for PdfDoc {
    fn check(&self) -> Result<(), String> {
        if self.pdf_title.trim().is_empty() {
            return Err("document title is empty".to_string());
        }
        if self.sections.is_empty() {
            return Err("document has no sections".to_string());
        }
        if let Some(section) = self.sections.iter().find(|s| s.heading.trim().is_empty()) {
            return Err(format!(
                "section with content '{}' has no heading",
                preview(&section.content)
            ));
        }
        Ok(())
    }
}

impl ResponseContract for PitchDeck {
    fn check(&self) -> Result<(), String> {
        if self.slides.is_empty() {
            return Err("pitch deck has no slides".to_string());
        }
        if self.slides.iter().any(|s| s.title.trim().is_empty()) {
            return Err("pitch deck contains an untitled slide".to_string());
        }
        Ok(())
    }
}

impl ResponseContract for Workbook {
    fn check(&self) -> Result<(), String> {
        if self.sheets.is_empty() {
            return Err("workbook has no sheets".to_string());
        }
        for (name, sheet) in &self.sheets {
            if sheet.columns.is_empty() {
                return Err(format!("sheet '{}' has no columns", name));
            }
        }
        Ok(())
    }
}

impl ResponseContract for QuizItem {
    fn check(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err(format!("quiz question '{}' has no options", self.question));
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(format!(
                "quiz question '{}' lists correct answer '{}' outside its options",
                self.question, self.correct_answer
            ));
        }
        Ok(())
    }
}

impl ResponseContract for VoiceReply {
    fn check(&self) -> Result<(), String> {
        if self.reply_text.trim().is_empty() {
            return Err("voice reply has no text".to_string());
        }
        Ok(())
    }
}

fn preview(s: &str) -> &str {
    let end = s
        .char_indices()
        .nth(40)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}
