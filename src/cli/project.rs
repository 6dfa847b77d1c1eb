//! Project management CLI commands

use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::{self, Write};

use crate::todoist::TaskClient;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Create a new project
    Add(ProjectAddArgs),

    /// Delete a project
    Remove(ProjectRemoveArgs),
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Project name
    name: String,
}

#[derive(Args)]
pub struct ProjectRemoveArgs {
    /// Project name
    name: String,

    /// Skip confirmation prompts
    #[arg(short = 'y')]
    yes: bool,
}

pub async fn run(command: ProjectCommands) -> Result<()> {
    let mut client = TaskClient::new()?;
    match command {
        ProjectCommands::List => run_list(&client).await,
        ProjectCommands::Add(args) => run_add(&mut client, args).await,
        ProjectCommands::Remove(args) => run_remove(&mut client, args).await,
    }
}

async fn run_list(client: &TaskClient) -> Result<()> {
    let projects = client.list_projects().await?;

    if projects.is_empty() {
        println!("No projects found");
        return Ok(());
    }

    println!("Projects ({}):\n", projects.len());
    for project in &projects {
        println!("  [{}] {}", project.id, project.name);
    }

    Ok(())
}

async fn run_add(client: &mut TaskClient, args: ProjectAddArgs) -> Result<()> {
    let project = client.create_project(&args.name).await?;
    println!("Created project '{}' ({})", project.name, project.id);
    Ok(())
}

async fn run_remove(client: &mut TaskClient, args: ProjectRemoveArgs) -> Result<()> {
    let Some(project) = client.resolve_project(&args.name).await? else {
        anyhow::bail!("Project not found: {}", args.name);
    };

    if !args.yes {
        print!(
            "Delete project '{}' ({}) and all its tasks? [y/N] ",
            project.name, project.id
        );
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if response.trim().to_lowercase() != "y" {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    client.delete_project(&project.id).await?;
    println!("Deleted project '{}'", project.name);
    Ok(())
}
