//! Task management CLI commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::truncate;
use crate::todoist::{NewTask, Task, TaskClient, TaskUpdate};

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List open tasks in a project
    List(TaskListArgs),

    /// Show task details with comments and subtasks
    Show(TaskShowArgs),

    /// Add a new task
    Add(TaskAddArgs),

    /// Update fields on a task
    Update(TaskUpdateArgs),

    /// Add a comment to a task
    Comment(TaskCommentArgs),

    /// Show the last activity timestamp of a task
    Activity(TaskActivityArgs),

    /// Move a task to another project
    Move(TaskMoveArgs),
}

#[derive(Args)]
pub struct TaskListArgs {
    /// Project name (defaults to the configured default project)
    #[arg(short, long)]
    project: Option<String>,
}

#[derive(Args)]
pub struct TaskShowArgs {
    /// Task ID
    id: String,
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task title
    content: String,

    /// Detailed description
    #[arg(short, long)]
    description: Option<String>,

    /// Human-readable due date (e.g. "tomorrow at 5pm")
    #[arg(long)]
    due: Option<String>,

    /// Priority 1 (normal) to 4 (urgent)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    priority: Option<u8>,

    /// Create as a subtask of this task (overrides any project)
    #[arg(long)]
    parent: Option<String>,

    /// Project name (defaults to the configured default project)
    #[arg(short, long)]
    project: Option<String>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    /// Task ID
    id: String,

    /// New title
    #[arg(long)]
    content: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// New human-readable due date
    #[arg(long)]
    due: Option<String>,

    /// New priority 1 (normal) to 4 (urgent)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    priority: Option<u8>,
}

#[derive(Args)]
pub struct TaskCommentArgs {
    /// Task ID
    id: String,

    /// Comment text
    content: String,
}

#[derive(Args)]
pub struct TaskActivityArgs {
    /// Task ID
    id: String,
}

#[derive(Args)]
pub struct TaskMoveArgs {
    /// Task ID
    id: String,

    /// Destination project name
    project: String,
}

pub async fn run(command: TaskCommands) -> Result<()> {
    let mut client = TaskClient::new()?;
    match command {
        TaskCommands::List(args) => run_list(&mut client, args).await,
        TaskCommands::Show(args) => run_show(&client, args).await,
        TaskCommands::Add(args) => run_add(&mut client, args).await,
        TaskCommands::Update(args) => run_update(&client, args).await,
        TaskCommands::Comment(args) => run_comment(&client, args).await,
        TaskCommands::Activity(args) => run_activity(&client, args).await,
        TaskCommands::Move(args) => run_move(&mut client, args).await,
    }
}

fn task_line(task: &Task) -> String {
    let due = task
        .due
        .as_ref()
        .map(|d| format!(" (due {})", d.date))
        .unwrap_or_default();
    format!(
        "  [p{}] {} {}{}",
        task.priority,
        task.id,
        truncate(&task.content, 60),
        due
    )
}

async fn run_list(client: &mut TaskClient, args: TaskListArgs) -> Result<()> {
    let name = args
        .project
        .unwrap_or_else(|| client.config().default_project.clone());
    let tasks = client.list_open_tasks(Some(&name)).await?;

    if tasks.is_empty() {
        println!("No open tasks in '{}'", name);
        return Ok(());
    }

    println!("Open tasks in '{}' ({}):\n", name, tasks.len());
    for task in &tasks {
        println!("{}", task_line(task));
    }

    Ok(())
}

async fn run_show(client: &TaskClient, args: TaskShowArgs) -> Result<()> {
    let detail = client.get_task_detail(&args.id).await?;
    let task = &detail.task;

    println!("{}: {}", task.id, task.content);
    println!("  Priority: p{}", task.priority);
    println!("  Project: {}", task.project_id);

    if let Some(parent) = &task.parent_id {
        println!("  Parent: {}", parent);
    }

    if let Some(due) = &task.due {
        if due.string.is_empty() {
            println!("  Due: {}", due.date);
        } else {
            println!("  Due: {} ({})", due.date, due.string);
        }
    }

    if !task.labels.is_empty() {
        println!("  Labels: {}", task.labels.join(", "));
    }

    if !task.description.is_empty() {
        println!("  Description: {}", task.description);
    }

    if !task.created_at.is_empty() {
        println!("  Created: {}", task.created_at);
    }

    if !detail.comments.is_empty() {
        println!("\nComments ({}):", detail.comments.len());
        for comment in &detail.comments {
            println!("  [{}] {}", comment.posted_at, comment.content);
        }
    }

    if !detail.subtasks.is_empty() {
        println!("\nSubtasks ({}):", detail.subtasks.len());
        for subtask in &detail.subtasks {
            println!("{}", task_line(subtask));
        }
    }

    Ok(())
}

async fn run_add(client: &mut TaskClient, args: TaskAddArgs) -> Result<()> {
    let new = NewTask {
        content: args.content,
        description: args.description,
        due_string: args.due,
        priority: args.priority,
        parent_id: args.parent,
        project: args.project,
    };
    let task = client.create_task(&new).await?;
    println!("Created task {}: {}", task.id, task.content);
    Ok(())
}

async fn run_update(client: &TaskClient, args: TaskUpdateArgs) -> Result<()> {
    let update = TaskUpdate {
        content: args.content,
        description: args.description,
        due_string: args.due,
        priority: args.priority,
    };
    let task = client.update_task(&args.id, &update).await?;
    println!("Updated task {}: {}", task.id, task.content);
    Ok(())
}

async fn run_comment(client: &TaskClient, args: TaskCommentArgs) -> Result<()> {
    let comment = client.add_comment(&args.id, &args.content).await?;
    println!("Added comment {} to task {}", comment.id, args.id);
    Ok(())
}

async fn run_activity(client: &TaskClient, args: TaskActivityArgs) -> Result<()> {
    let timestamp = client.last_activity(&args.id).await?;
    println!("{}", timestamp);
    Ok(())
}

async fn run_move(client: &mut TaskClient, args: TaskMoveArgs) -> Result<()> {
    let Some(project) = client.resolve_project(&args.project).await? else {
        anyhow::bail!("Project not found: {}", args.project);
    };
    let task = client.move_task(&args.id, &project.id).await?;
    println!("Moved task {} to '{}'", task.id, project.name);
    Ok(())
}
