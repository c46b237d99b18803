//! Cleanup filters.
//!
//! Both filters keep the relative order of everything they let through and
//! commute with each other.

use super::types::Command;
use super::Transform;

/// Drop every mouse command.
pub fn remove_mouse(commands: &[Command]) -> Vec<Command> {
    commands.iter().filter(|c| !c.is_mouse()).cloned().collect()
}

/// Drop delays of exactly zero milliseconds. Everything else passes through.
pub fn remove_zero_delays(commands: &[Command]) -> Vec<Command> {
    commands
        .iter()
        .filter(|c| !matches!(c, Command::Delay { ms: 0 }))
        .cloned()
        .collect()
}

/// Transform form of [`remove_mouse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveMouse;

impl Transform for RemoveMouse {
    fn transform(&mut self, commands: &[Command]) -> Vec<Command> {
        remove_mouse(commands)
    }
}

/// Transform form of [`remove_zero_delays`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveZeroDelays;

impl Transform for RemoveZeroDelays {
    fn transform(&mut self, commands: &[Command]) -> Vec<Command> {
        remove_zero_delays(commands)
    }
}
