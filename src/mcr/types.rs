//! Command model for MCR macro recordings.
//!
//! A recording is an ordered `Vec<Command>`. Order is execution order and is
//! the only relationship between entries. Transforms never mutate a sequence
//! in place; they take a slice and build a new vector.

use serde::{Deserialize, Serialize};

// ============================================================================
// Key actions
// ============================================================================

/// Keyboard action state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    /// Key pressed ("KeyDown")
    Down,
    /// Key released ("KeyUp")
    Up,
}

impl KeyAction {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyDown" => Some(KeyAction::Down),
            "KeyUp" => Some(KeyAction::Up),
            _ => None,
        }
    }

    /// Render the action for an MCR line.
    ///
    /// Only `Down` renders as `KeyDown`; every other state renders as `KeyUp`.
    pub fn to_code(&self) -> &'static str {
        if *self == KeyAction::Down {
            "KeyDown"
        } else {
            "KeyUp"
        }
    }
}

// ============================================================================
// Command
// ============================================================================

/// One decoded macro step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    /// Key press or release
    Keyboard { key: String, action: KeyAction },
    /// Pointer event; `action` is an opaque label such as "move" or "click"
    Mouse { x: u64, y: u64, action: String },
    /// Pause in milliseconds
    Delay { ms: u64 },
    /// Reserved for typed text. Never produced by the decoder and has no
    /// MCR line representation.
    Text { content: String },
}

impl Command {
    pub fn keyboard(key: impl Into<String>, action: KeyAction) -> Self {
        Command::Keyboard {
            key: key.into(),
            action,
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self::keyboard(key, KeyAction::Down)
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::keyboard(key, KeyAction::Up)
    }

    pub fn mouse(x: u64, y: u64, action: impl Into<String>) -> Self {
        Command::Mouse {
            x,
            y,
            action: action.into(),
        }
    }

    pub fn delay(ms: u64) -> Self {
        Command::Delay { ms }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Command::Text {
            content: content.into(),
        }
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, Command::Keyboard { .. })
    }

    pub fn is_mouse(&self) -> bool {
        matches!(self, Command::Mouse { .. })
    }

    pub fn is_delay(&self) -> bool {
        matches!(self, Command::Delay { .. })
    }

    pub fn is_key_down(&self) -> bool {
        matches!(
            self,
            Command::Keyboard {
                action: KeyAction::Down,
                ..
            }
        )
    }

    /// The key name, for keyboard commands.
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Keyboard { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Delay length in milliseconds; zero for every other command.
    pub fn delay_ms(&self) -> u64 {
        match self {
            Command::Delay { ms } => *ms,
            _ => 0,
        }
    }

    /// Keystroke equality: both are keyboard commands with the same key and action.
    ///
    /// Non-keyboard commands never match anything.
    pub fn same_keystroke(&self, other: &Command) -> bool {
        match (self, other) {
            (
                Command::Keyboard { key: a, action: x },
                Command::Keyboard { key: b, action: y },
            ) => a == b && x == y,
            _ => false,
        }
    }
}

// ============================================================================
// Sequence helpers
// ============================================================================

/// Total playback time: the sum of every delay, in milliseconds.
pub fn duration(commands: &[Command]) -> u64 {
    commands
        .iter()
        .fold(0u64, |total, c| total.saturating_add(c.delay_ms()))
}

/// Per-kind counts for a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommandCounts {
    pub keyboard: usize,
    pub mouse: usize,
    pub delay: usize,
    pub text: usize,
}

impl CommandCounts {
    pub fn of(commands: &[Command]) -> Self {
        let mut counts = Self::default();
        for command in commands {
            match command {
                Command::Keyboard { .. } => counts.keyboard += 1,
                Command::Mouse { .. } => counts.mouse += 1,
                Command::Delay { .. } => counts.delay += 1,
                Command::Text { .. } => counts.text += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.keyboard + self.mouse + self.delay + self.text
    }
}
