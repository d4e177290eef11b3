use super::rubric::RUBRIC;

/// Render the grading instructions for one snippet.
///
/// The prescribed layout is a request to the model, not a guarantee. The
/// normalizer must tolerate replies that ignore every part of it, so this
/// function spends its effort on being maximally explicit about labels,
/// numeric ranges, and required sections.
pub fn build_prompt(code: &str, language: &str) -> String {
    let criteria = RUBRIC
        .iter()
        .map(|criterion| format!("- {} ({} points)", criterion.label, criterion.max))
        .collect::<Vec<_>>()
        .join("\n");

    let score_lines = RUBRIC
        .iter()
        .map(|criterion| format!("{}: <score>/{}", criterion.label, criterion.max))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Evaluate the following {language} code against these criteria:
{criteria}

The point values sum to 100. Respond using exactly this layout:

SCORES
{score_lines}
Total: <score>/100

SUMMARY
<two or three sentences describing the code's purpose and quality>

SUGGESTIONS
- <a concrete improvement, one per bullet, at most five bullets>

IMPROVED CODE
```{language}
<corrected or improved version of the code>
```

Code:
```{language}
{code}
```
"#
    )
}
