use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use code_grader::error::AppError;
use code_grader::workflows::review::{
    build_prompt, CodeReviewService, EvaluationResult, NormalizerConfig, ReviewSubmission,
};

use crate::infra::ScriptedGenerator;

#[derive(Args, Debug)]
pub(crate) struct PromptArgs {
    /// Source file to grade
    pub(crate) file: PathBuf,
    /// Language tag used for the fenced snippet and rubric wording
    #[arg(long)]
    pub(crate) language: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Read the model reply from a file instead of the built-in sample
    #[arg(long)]
    pub(crate) reply: Option<PathBuf>,
    /// Upper bound on the printed suggestion list
    #[arg(long)]
    pub(crate) max_suggestions: Option<usize>,
}

pub(crate) fn run_prompt(args: PromptArgs) -> Result<(), AppError> {
    let code = std::fs::read_to_string(&args.file)?;
    println!("{}", build_prompt(&code, &args.language));
    Ok(())
}

const SAMPLE_CODE: &str = "def greet(name):\n    print('Hello, ' + name)\n";

const SAMPLE_REPLY: &str = "SCORES\n\
Syntax: 28/30\n\
Logic: 24/30\n\
Methods Used: 14/20\n\
Objective Fulfillment: 17/20\n\
Total: 83/100\n\
\n\
SUMMARY\n\
Greets a caller by name. Works, but string concatenation is brittle for\n\
non-string inputs.\n\
\n\
SUGGESTIONS\n\
- Use an f-string instead of concatenation\n\
- Add a type hint for the name parameter\n\
- Return the greeting instead of printing it\n\
\n\
IMPROVED CODE\n\
```python\n\
def greet(name: str) -> str:\n\
    return f'Hello, {name}'\n\
```\n";

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let reply = match args.reply {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_REPLY.to_string(),
    };

    let mut config = NormalizerConfig::default();
    if let Some(max) = args.max_suggestions {
        config.max_suggestions = max;
    }

    let generator = Arc::new(ScriptedGenerator::new(reply));
    let service = CodeReviewService::new(generator, config);

    let submission = ReviewSubmission {
        code: SAMPLE_CODE.to_string(),
        language: "python".to_string(),
    };

    match service.review(submission).await {
        Ok(result) => render_result(&result),
        Err(err) => println!("Review unavailable: {err}"),
    }

    Ok(())
}

fn render_result(result: &EvaluationResult) {
    println!("Code grading demo (offline, scripted provider)");
    println!("\nScores");
    println!("- Syntax: {}/30", result.breakdown.syntax);
    println!("- Logic: {}/30", result.breakdown.logic);
    println!("- Methods Used: {}/20", result.breakdown.methods);
    println!("- Objective Fulfillment: {}/20", result.breakdown.objective);
    println!("- Total: {}/100", result.breakdown.total());
    println!("\nSummary");
    println!("{}", result.summary);
    println!("\nSuggestions");
    for suggestion in &result.suggestions {
        println!("- {suggestion}");
    }
    println!("\nImproved code");
    println!("{}", result.improved_code);
}
