//! CLI command implementations

pub mod agents;
pub mod definition;
pub mod project;
pub mod task;

pub use definition::{Cli, Commands};

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..floor_char_boundary(s, max)].to_string()
    } else {
        format!("{}...", &s[..floor_char_boundary(s, max - 3)])
    }
}

/// Largest byte index at or below `max` that lands on a char boundary.
/// Task content is arbitrary Unicode; a cut inside a multi-byte char
/// would panic.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= max)
        .last()
        .unwrap_or(0)
}
