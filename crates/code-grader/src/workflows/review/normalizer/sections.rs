use super::Extraction;
use super::{DEFAULT_SUGGESTION, NO_SUMMARY_SENTINEL};

/// Section labels recognized as boundaries when walking a reply.
const SECTION_LABELS: [&str; 4] = ["SCORES", "SUMMARY", "SUGGESTIONS", "IMPROVED CODE"];

const SUMMARY_LABEL: &str = "SUMMARY";
const SUGGESTIONS_LABEL: &str = "SUGGESTIONS";

/// Identify a section heading line, returning the canonical label plus any
/// inline content after the label's colon.
///
/// A line counts as a heading when it starts with a known label (after
/// stripping markdown decoration) and the remainder is either decoration only
/// or carries a colon. "Suggestions for Improvement:" is a SUGGESTIONS
/// heading; a sentence that merely begins with the word "summary" is not.
fn heading(line: &str) -> Option<(&'static str, &str)> {
    let stripped = line.trim().trim_start_matches(['#', '*', '_', ' ', '\t']);

    for label in SECTION_LABELS {
        let Some(prefix) = stripped.get(..label.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(label) {
            continue;
        }

        let rest = &stripped[label.len()..];
        if rest.chars().next().is_some_and(|c| c.is_alphanumeric()) {
            continue;
        }

        if let Some((_, after)) = rest.split_once(':') {
            let inline =
                after.trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace());
            return Some((label, inline));
        }

        let decoration_only = rest
            .chars()
            .all(|c| matches!(c, '*' | '_' | '#' | ' ' | '\t'));
        if decoration_only {
            return Some((label, ""));
        }
    }

    None
}

/// Capture the labeled summary: inline text plus following lines up to the
/// first blank line or the next recognized section, whichever comes first.
pub(crate) fn summary(raw_text: &str) -> Extraction<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in raw_text.lines() {
        if let Some((label, inline)) = heading(line) {
            if in_section {
                break;
            }
            if label == SUMMARY_LABEL {
                in_section = true;
                if !inline.is_empty() {
                    collected.push(inline);
                }
            }
            continue;
        }

        if in_section {
            if line.trim().is_empty() {
                break;
            }
            collected.push(line.trim());
        }
    }

    let text = collected.join(" ");
    if text.trim().is_empty() {
        Extraction::Defaulted(NO_SUMMARY_SENTINEL.to_string())
    } else {
        Extraction::Found(text.trim().to_string())
    }
}

/// Capture the labeled suggestion list: bullets inside the SUGGESTIONS
/// section, bounded by the next recognized section or end of text. Items keep
/// their original order; the list is truncated to `max_suggestions` and never
/// returned empty.
pub(crate) fn suggestions(raw_text: &str, max_suggestions: usize) -> Extraction<Vec<String>> {
    let mut items: Vec<String> = Vec::new();
    let mut in_section = false;

    for line in raw_text.lines() {
        if let Some((label, inline)) = heading(line) {
            if in_section {
                break;
            }
            if label == SUGGESTIONS_LABEL {
                in_section = true;
                if !inline.is_empty() {
                    items.push(inline.to_string());
                }
            }
            continue;
        }

        if !in_section {
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(body) = bullet_body(trimmed) {
            let body = body.trim();
            if !body.is_empty() {
                items.push(body.to_string());
            }
        } else if let Some(current) = items.last_mut() {
            // Wrapped bullet text continues the previous item.
            let continuation = line.trim();
            if !continuation.is_empty() {
                current.push(' ');
                current.push_str(continuation);
            }
        }
    }

    if items.is_empty() {
        return Extraction::Defaulted(vec![DEFAULT_SUGGESTION.to_string()]);
    }

    items.truncate(max_suggestions);
    Extraction::Found(items)
}

fn bullet_body(line: &str) -> Option<&str> {
    line.strip_prefix('•')
        .or_else(|| line.strip_prefix('-'))
        .or_else(|| line.strip_prefix('*'))
}
