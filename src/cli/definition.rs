//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::{agents::AgentsCommands, project::ProjectCommands, task::TaskCommands};

#[derive(Parser)]
#[command(name = "ta", author, version, about = "Todoist-backed task tools for AI agent personas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work with tasks
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Work with projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Inspect the agent persona registry
    Agents {
        #[command(subcommand)]
        command: AgentsCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
