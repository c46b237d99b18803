//! MCR macro recording format and transforms
//!
//! An MCR file is a line-oriented text recording of keyboard, mouse and
//! timing events. This module parses and writes that format and provides
//! the operations that run over a decoded command sequence.
//!
//! # Structure
//!
//! - `reader` / `writer` - Line codec between text and [`Command`]s
//! - `transform` - The [`Transform`] trait and [`TransformChain`]
//! - `cleanup` - Mouse and zero-delay removal
//! - `lengthen` - Whole-sequence repetition up to a target duration
//! - `humanize` - Randomized delay jitter, typos, hesitation and filler
//! - `matcher` - Greedy discovery of keyboard motifs shared by two recordings
//! - `merge` - Humanizing the shared motifs of one recording in place

mod cancel;
mod cleanup;
pub mod humanize;
pub mod keyboard;
mod lengthen;
mod matcher;
mod merge;
mod reader;
mod transform;
mod types;
mod writer;

pub use cancel::{CancelToken, HumanizeError};
pub use cleanup::{remove_mouse, remove_zero_delays, RemoveMouse, RemoveZeroDelays};
pub use humanize::{humanize, HumanizationSettings, Humanizer};
pub use lengthen::{lengthen, output_len, repetitions_for, Lengthen};
pub use matcher::{find_common_sequences, MIN_PATTERN_LEN};
pub use merge::{merge_and_optimize, merge_and_optimize_interleaved, MatchMode, MergeOptimizer};
pub use reader::{decode, COMMENT_PREFIX};
pub use transform::{Transform, TransformChain};
pub use types::{duration, Command, CommandCounts, KeyAction};
pub use writer::{encode, LINE_ENDING};

// ============================================================================
// MacroFile
// ============================================================================

/// A decoded macro recording.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroFile {
    pub commands: Vec<Command>,
}

impl MacroFile {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Total playback time in milliseconds
    pub fn duration(&self) -> u64 {
        duration(&self.commands)
    }

    pub fn counts(&self) -> CommandCounts {
        CommandCounts::of(&self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Run a transform over the commands in place.
    pub fn apply<T: Transform + ?Sized>(&mut self, transform: &mut T) {
        self.commands = transform.transform(&self.commands);
    }
}
