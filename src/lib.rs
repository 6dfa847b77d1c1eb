//! Task Agent library - Todoist client and agent persona registry
//!
//! The `todoist` module holds the resilient REST client the personas use as
//! their tool surface; `agents` holds the persona registry itself.

pub mod agents;
pub mod cli;
pub mod todoist;
