use super::common::*;
use crate::workflows::review::domain::EvaluationRequest;
use crate::workflows::review::normalizer::{
    NormalizerConfig, ResponseNormalizer, DEFAULT_SUGGESTION, NO_IMPROVEMENT_SENTINEL,
    NO_SUMMARY_SENTINEL,
};

fn request() -> EvaluationRequest {
    EvaluationRequest::new(SAMPLE_CODE, "python").expect("valid request")
}

#[test]
fn well_formed_reply_is_fully_recovered() {
    let result = normalizer().normalize(&well_formed_reply(), &request());

    assert_eq!(result.breakdown.syntax, 10);
    assert_eq!(result.breakdown.logic, 20);
    assert_eq!(result.breakdown.methods, 15);
    assert_eq!(result.breakdown.objective, 18);
    assert_eq!(result.breakdown.total(), 63);
    assert_eq!(
        result.summary,
        "The snippet attempts to print a string but the call is unterminated."
    );
    assert_eq!(result.suggestions.len(), 3);
    assert_eq!(result.suggestions[0], "Close the parenthesis on the print call");
    assert_eq!(result.improved_code, "print('x')");
    assert_eq!(result.raw_text, well_formed_reply());
}

#[test]
fn total_is_recomputed_not_read_from_the_reply() {
    // The model miscalculates its own total; the stored breakdown wins.
    let reply = "Syntax: 10/30\nLogic: 10/30\nMethods Used: 10/20\nObjective Fulfillment: 10/20\nTotal: 97/100\n";
    let result = normalizer().normalize(reply, &request());
    assert_eq!(result.breakdown.total(), 40);
}

#[test]
fn out_of_range_scores_are_clamped_before_the_total() {
    let reply = "Syntax: 10/30\nLogic: 45/30\nMethods Used: 15/20\nObjective Fulfillment: 18/20\n";
    let result = normalizer().normalize(reply, &request());
    assert_eq!(result.breakdown.logic, 30);
    assert_eq!(result.breakdown.total(), 73);
}

#[test]
fn missing_sections_resolve_to_sentinels_never_empty_values() {
    let reply = "Syntax: 10/30\nsome ramble with no labeled sections\n";
    let result = normalizer().normalize(reply, &request());

    assert_eq!(result.summary, NO_SUMMARY_SENTINEL);
    assert_eq!(result.suggestions, vec![DEFAULT_SUGGESTION.to_string()]);
    assert!(!result.summary.is_empty());
    assert!(!result.suggestions.is_empty());
}

#[test]
fn suggestion_lists_respect_the_configured_maximum() {
    let bullets = (1..=10)
        .map(|n| format!("- suggestion {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    let reply = format!("SUGGESTIONS\n{bullets}\n");

    let tight = ResponseNormalizer::new(NormalizerConfig { max_suggestions: 3 });
    let result = tight.normalize(&reply, &request());
    assert_eq!(
        result.suggestions,
        vec![
            "suggestion 1".to_string(),
            "suggestion 2".to_string(),
            "suggestion 3".to_string(),
        ]
    );
}

#[test]
fn improved_code_prefers_the_last_of_two_blocks() {
    let reply = "Original:\n```python\nprint('x'\n```\nFixed:\n```python\nprint('x')\n```\n";
    let result = normalizer().normalize(reply, &request());
    assert_eq!(result.improved_code, "print('x')");
}

#[test]
fn a_lone_echoed_block_is_replaced_by_the_sentinel() {
    let reply = format!("Looks fine already.\n```python\n{SAMPLE_CODE}\n```\n");
    let result = normalizer().normalize(&reply, &request());
    assert_eq!(result.improved_code, NO_IMPROVEMENT_SENTINEL);
}

#[test]
fn no_fenced_blocks_fall_back_to_the_original_code() {
    let reply = "SUMMARY: nothing to show.\n";
    let result = normalizer().normalize(reply, &request());
    assert_eq!(result.improved_code, SAMPLE_CODE);
}
