//! Document export.
//!
//! Generated document trees are handed to external renderers for the final
//! PDF/slide/spreadsheet bytes; this module only serializes each artifact to
//! a pretty-printed JSON file a renderer can pick up.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;
use crate::model::{PdfDoc, PitchDeck, Workbook};

/// A generated document ready for a downstream renderer.
#[derive(Debug, Clone)]
pub enum DocumentArtifact {
    ConceptNote(PdfDoc),
    PitchDeck(PitchDeck),
    Financials(Workbook),
}

impl DocumentArtifact {
    /// Suffix distinguishing the artifact kind in the output file name.
    fn kind_suffix(&self) -> &'static str {
        match self {
            DocumentArtifact::ConceptNote(_) => "concept-note",
            DocumentArtifact::PitchDeck(_) => "pitch-deck",
            DocumentArtifact::Financials(_) => "financials",
        }
    }

    fn to_json(&self) -> Result<String, serde_json::Error> {
        fn pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
            serde_json::to_string_pretty(value)
        }
        match self {
            DocumentArtifact::ConceptNote(doc) => pretty(doc),
            DocumentArtifact::PitchDeck(deck) => pretty(deck),
            DocumentArtifact::Financials(workbook) => pretty(workbook),
        }
    }
}

/// Writes an artifact to `<dir>/<name>.<kind>.json` and returns the path.
///
/// The base name is sanitized to filesystem-safe characters; a name that
/// sanitizes to nothing is rejected.
pub fn write_artifact(
    dir: &Path,
    base_name: &str,
    artifact: &DocumentArtifact,
) -> Result<PathBuf, ExportError> {
    let stem = sanitize_file_name(base_name);
    if stem.is_empty() {
        return Err(ExportError::InvalidFileName(base_name.to_string()));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}.json", stem, artifact.kind_suffix()));
    let json = artifact.to_json()?;
    fs::write(&path, json)?;
    tracing::info!(path = %path.display(), "Wrote document artifact");
    Ok(path)
}

/// Lowercases and maps anything outside `[a-z0-9-_]` to '-', collapsing runs.
fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true; // suppress a leading dash
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
