use crate::demo::{run_demo, run_prompt, DemoArgs, PromptArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use code_grader::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Code Review Grader",
    about = "Grade code snippets against a fixed rubric using a generative text provider",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render the grading prompt for a local file without calling the provider
    Prompt(PromptArgs),
    /// Run the grading pipeline offline against a canned or supplied reply
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Prompt(args) => run_prompt(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
