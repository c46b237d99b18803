//! Duration-targeted looping.
//!
//! The whole recording is repeated until its total delay reaches the target.
//! The result overshoots by less than one full loop; an exact duration is
//! not attempted.

use tracing::debug;

use super::types::{duration, Command};
use super::Transform;

/// Number of whole repetitions needed to reach `target_ms`, or `None` when
/// the sequence should be left as is.
pub fn repetitions_for(current_ms: u64, target_ms: u64) -> Option<u64> {
    if current_ms == 0 || target_ms <= current_ms {
        return None;
    }
    let reps = target_ms / current_ms + u64::from(target_ms % current_ms != 0);
    Some(reps)
}

/// Slots needed for `len` commands repeated `reps` times, or `None` when the
/// product does not fit in memory addressing.
pub fn output_len(len: usize, reps: u64) -> Option<usize> {
    usize::try_from(reps).ok().and_then(|reps| len.checked_mul(reps))
}

/// Repeat `commands` until `duration(result) >= target_ms`.
///
/// A zero-duration input, or one that is already long enough, is returned
/// unchanged.
pub fn lengthen(commands: &[Command], target_ms: u64) -> Vec<Command> {
    let current = duration(commands);

    let Some(reps) = repetitions_for(current, target_ms) else {
        return commands.to_vec();
    };

    debug!(current, target_ms, reps, "lengthening recording");

    let mut out = match output_len(commands.len(), reps) {
        Some(capacity) => Vec::with_capacity(capacity),
        None => Vec::new(),
    };
    for _ in 0..reps {
        out.extend_from_slice(commands);
    }
    out
}

/// Transform form of [`lengthen`].
#[derive(Debug, Clone, Copy)]
pub struct Lengthen {
    target_ms: u64,
}

impl Lengthen {
    pub fn new(target_ms: u64) -> Self {
        Self { target_ms }
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }
}

impl Transform for Lengthen {
    fn transform(&mut self, commands: &[Command]) -> Vec<Command> {
        lengthen(commands, self.target_ms)
    }
}
