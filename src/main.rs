//! Task Agent - Todoist-backed task tools for AI agent personas

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_agent::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASK_AGENT_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_agent=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "ta", &mut std::io::stdout());
            Ok(())
        }
        Commands::Task { command } => cli::task::run(command).await,
        Commands::Project { command } => cli::project::run(command).await,
        Commands::Agents { command } => cli::agents::run(command),
    }
}
