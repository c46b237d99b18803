//! Command transformation pipeline.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! building new command sequences out of old ones. A transform never edits
//! its input: it borrows a slice and returns a fresh vector, so the same
//! recording can be fed to several pipelines without aliasing.
//!
//! # Example
//!
//! ```
//! use mcrkit::mcr::{Command, RemoveMouse, RemoveZeroDelays, Transform, TransformChain};
//!
//! let mut chain = TransformChain::new()
//!     .with(RemoveMouse)
//!     .with(RemoveZeroDelays);
//!
//! let commands = vec![
//!     Command::key_down("A"),
//!     Command::mouse(1, 2, "move"),
//!     Command::delay(0),
//!     Command::key_up("A"),
//! ];
//!
//! let cleaned = chain.transform(&commands);
//! assert_eq!(cleaned, vec![Command::key_down("A"), Command::key_up("A")]);
//! assert_eq!(commands.len(), 4);
//! ```

use super::types::Command;

/// A transformation from one command sequence to another.
///
/// Transforms are infallible. Commands a transform cannot handle are
/// passed through or dropped, never reported as errors. The `&mut self`
/// receiver lets a transform carry state such as a random source.
pub trait Transform {
    /// Build the transformed sequence.
    fn transform(&mut self, commands: &[Command]) -> Vec<Command>;
}

/// A chain of transforms applied in sequence.
///
/// Each transform sees the output of the previous one.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create an empty transform chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the chain.
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Add a transform only when `enabled` is true.
    pub fn with_if<T: Transform + 'static>(self, enabled: bool, transform: T) -> Self {
        if enabled {
            self.with(transform)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    fn transform(&mut self, commands: &[Command]) -> Vec<Command> {
        let mut current = commands.to_vec();
        for transform in &mut self.transforms {
            current = transform.transform(&current);
        }
        current
    }
}
