use super::Extraction;
use super::NO_IMPROVEMENT_SENTINEL;

/// Collect the body of every fenced block in document order, ignoring the
/// info string on the opening fence. A reply truncated mid-block still
/// contributes its partial body.
pub(crate) fn fenced_blocks(raw_text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in raw_text.lines() {
        if line.trim_start().starts_with("```") {
            match current.take() {
                Some(body) => blocks.push(body.join("\n")),
                None => current = Some(Vec::new()),
            }
            continue;
        }

        if let Some(body) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some(body) = current {
        blocks.push(body.join("\n"));
    }

    blocks
}

/// Select the improved snippet from the reply's fenced blocks.
///
/// Two or more blocks: the last one wins, on the assumption that the model
/// presents original-then-improved in document order. Exactly one block: use
/// it, unless it merely echoes the input, in which case a sentinel replaces
/// it. No blocks: the original code is returned unchanged.
///
/// With three or more blocks this heuristic can misfire (a model may emit
/// illustrative snippets before its real answer); it is deterministic, not
/// guaranteed correct.
pub(crate) fn improved_code(raw_text: &str, original_code: &str) -> Extraction<String> {
    let mut blocks = fenced_blocks(raw_text);
    let count = blocks.len();

    match blocks.pop() {
        None => Extraction::Defaulted(original_code.to_string()),
        Some(block) if count == 1 && block.trim() == original_code.trim() => {
            Extraction::Defaulted(NO_IMPROVEMENT_SENTINEL.to_string())
        }
        Some(block) => Extraction::Found(block),
    }
}
