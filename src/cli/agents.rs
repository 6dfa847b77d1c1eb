//! Persona registry CLI commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::agents::{get_persona, resolve_persona, PersonaDef, PERSONAS, TOOL_NAMES};

#[derive(Subcommand)]
pub enum AgentsCommands {
    /// List registered personas
    List,

    /// Show one persona's instruction and tool grants
    Show(AgentsShowArgs),

    /// List the tool names personas can be granted
    Tools,
}

#[derive(Args)]
pub struct AgentsShowArgs {
    /// Persona name, or a unique fragment of one (e.g. "smart")
    name: String,
}

pub fn run(command: AgentsCommands) -> Result<()> {
    match command {
        AgentsCommands::List => run_list(),
        AgentsCommands::Show(args) => run_show(args),
        AgentsCommands::Tools => run_tools(),
    }
}

fn run_list() -> Result<()> {
    println!("Personas ({}):\n", PERSONAS.len());
    for persona in PERSONAS {
        println!("  {} — {}", persona.name, persona.description);
    }
    Ok(())
}

fn lookup(name: &str) -> Option<&'static PersonaDef> {
    get_persona(name).or_else(|| resolve_persona(name).and_then(get_persona))
}

fn run_show(args: AgentsShowArgs) -> Result<()> {
    let Some(persona) = lookup(&args.name) else {
        anyhow::bail!(
            "Persona not found: {} (known: {})",
            args.name,
            crate::agents::persona_names().join(", ")
        );
    };

    println!("{}", persona.name);
    println!("  {}", persona.description);
    println!("\nModel: {}", persona.model);

    if !persona.tools.is_empty() {
        println!("\nTools:");
        for tool in persona.tools {
            println!("  - {}", tool);
        }
    }

    if !persona.delegates_to.is_empty() {
        println!("\nDelegates to:");
        for delegate in persona.delegates_to {
            println!("  - {}", delegate);
        }
    }

    println!("\nInstruction:\n{}", persona.instruction);
    Ok(())
}

fn run_tools() -> Result<()> {
    println!("Tools ({}):\n", TOOL_NAMES.len());
    for tool in TOOL_NAMES {
        println!("  {}", tool);
    }
    Ok(())
}
