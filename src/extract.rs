//! JSON extraction from model response text.
//!
//! The endpoint is asked for JSON output, but responses occasionally arrive
//! wrapped in a markdown code fence or preceded by a sentence of prose. This
//! module locates the JSON payload; validating and typing it is the
//! gateway's job.

use regex::Regex;

/// Locates the JSON object or array in a response.
///
/// Strategies, in order:
/// 1. ```json code fence
/// 2. generic ``` code fence
/// 3. direct content starting with '{' or '['
/// 4. first brace-matched object anywhere in the text
///
/// Returns `None` when no syntactically complete candidate is found; the
/// caller translates that into a contract violation.
pub fn extract_json(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(json) = extract_from_fence(trimmed) {
        return Some(json);
    }

    if trimmed.starts_with('{') {
        if let Some(end) = find_matching_brace(trimmed) {
            return Some(trimmed[..=end].to_string());
        }
        return None;
    }
    if trimmed.starts_with('[') {
        if let Some(end) = find_matching_bracket(trimmed) {
            return Some(trimmed[..=end].to_string());
        }
        return None;
    }

    // Object embedded in surrounding prose.
    let start = trimmed.find('{')?;
    let end = find_matching_brace(&trimmed[start..])?;
    Some(trimmed[start..=start + end].to_string())
}

/// Extracts the body of a ```json or generic ``` code fence, if the fenced
/// content holds a complete object.
fn extract_from_fence(content: &str) -> Option<String> {
    let re = Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").ok()?;
    let caps = re.captures(content)?;
    let body = caps.get(1)?.as_str().trim();
    let start = body.find('{')?;
    let end = find_matching_brace(&body[start..])?;
    Some(body[start..=start + end].to_string())
}

/// Index of the '}' matching the leading '{', honoring string literals and
/// escape sequences.
pub fn find_matching_brace(s: &str) -> Option<usize> {
    scan_balanced(s, '{', '}')
}

/// Index of the ']' matching the leading '[', honoring string literals and
/// escape sequences.
pub fn find_matching_bracket(s: &str) -> Option<usize> {
    scan_balanced(s, '[', ']')
}

fn scan_balanced(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
