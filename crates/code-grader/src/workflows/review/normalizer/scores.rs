use regex::Regex;

use super::super::rubric::{Criterion, RUBRIC};
use super::Extraction;

/// Compiled pattern chains for the whole rubric, built once per normalizer.
pub(crate) struct ScorePatterns {
    criteria: Vec<CriterionPatterns>,
}

impl ScorePatterns {
    pub(crate) fn compile() -> Self {
        let criteria = RUBRIC.iter().map(CriterionPatterns::compile).collect();
        Self { criteria }
    }

    /// Extraction outcomes in rubric order.
    pub(crate) fn extract_all(&self, raw_text: &str) -> [Extraction<u8>; 4] {
        let mut outcomes = [Extraction::Defaulted(0); 4];
        for (slot, criterion) in outcomes.iter_mut().zip(&self.criteria) {
            *slot = criterion.extract(raw_text);
        }
        outcomes
    }
}

/// Ordered pattern chain for one criterion, most specific first. The chain is
/// a list evaluated until one pattern succeeds, so new reply formats can be
/// appended without touching the existing ones.
struct CriterionPatterns {
    max: u8,
    chain: Vec<Regex>,
}

impl CriterionPatterns {
    fn compile(criterion: &Criterion) -> Self {
        let label = alias_group(criterion);
        let chain = [
            // "Label: N/Max", tolerating markdown emphasis around the label
            // and after the colon.
            format!(r"(?i){label}[\s*_]*:\s*\**\s*(\d{{1,3}})\s*/\s*\d{{1,3}}"),
            // "Label (N/Max)"
            format!(r"(?i){label}[\s*_]*\(\s*(\d{{1,3}})\s*/\s*\d{{1,3}}\s*\)"),
            // Prose on a single line: "Label ... N out of Max"
            format!(r"(?i){label}\b[^\n]*?\b(\d{{1,3}})\s+out\s+of\s+\d{{1,3}}"),
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("score pattern compiles"))
        .collect();

        Self {
            max: criterion.max,
            chain,
        }
    }

    fn extract(&self, raw_text: &str) -> Extraction<u8> {
        for pattern in &self.chain {
            let Some(captures) = pattern.captures(raw_text) else {
                continue;
            };
            if let Some(value) = captures.get(1).and_then(|m| m.as_str().parse::<u16>().ok()) {
                // The model may report out-of-range numbers; clamp instead of
                // trusting them.
                return Extraction::Found(value.min(self.max as u16) as u8);
            }
        }
        Extraction::Defaulted(0)
    }
}

fn alias_group(criterion: &Criterion) -> String {
    let alternatives = criterion
        .aliases
        .iter()
        .map(|alias| alias.replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{alternatives})")
}
