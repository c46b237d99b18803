//! Merge/optimize: humanize the motifs of one recording that another shares.
//!
//! The output is built entirely from recording A. Recording B is only used to
//! discover which keyboard motifs of A are common to both. Walking those
//! motifs in discovery order with a cursor into the full, unfiltered A:
//!
//! - the motif is located at or after the cursor,
//! - the untouched part of A before it is copied,
//! - the located slice is replaced by a humanized copy,
//! - the cursor moves past it.
//!
//! A motif that cannot be located contributes nothing and leaves the cursor
//! where it is. The rest of A is copied unchanged at the end.
//!
//! In the default [`MatchMode::Contiguous`] mode a motif must appear as a
//! contiguous run of keystrokes. Recordings usually interleave delays
//! between keystrokes, so this often finds nothing and returns A unchanged.
//! [`MatchMode::Interleaved`] lets non-keyboard commands sit between the
//! motif's keystrokes and humanizes the whole located span.

use std::ops::Range;

use rand::Rng;
use tracing::{debug, trace};

use super::cancel::{CancelToken, HumanizeError};
use super::humanize::{HumanizationSettings, Humanizer};
use super::matcher::find_common_sequences;
use super::types::Command;

/// How a discovered motif is located in the full recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Keystrokes must be adjacent in A
    #[default]
    Contiguous,
    /// Non-keyboard commands may appear between the keystrokes
    Interleaved,
}

/// First contiguous run in `a[from..]` that is keystroke-equal to `pattern`.
fn locate_contiguous(a: &[Command], from: usize, pattern: &[Command]) -> Option<Range<usize>> {
    let len = pattern.len();
    if len == 0 || a.len() < len {
        return None;
    }

    (from..=a.len() - len)
        .find(|&start| {
            a[start..start + len]
                .iter()
                .zip(pattern)
                .all(|(x, p)| x.same_keystroke(p))
        })
        .map(|start| start..start + len)
}

/// First span in `a[from..]` whose keyboard commands are keystroke-equal to
/// `pattern`, allowing only non-keyboard commands in between.
fn locate_interleaved(a: &[Command], from: usize, pattern: &[Command]) -> Option<Range<usize>> {
    let first = pattern.first()?;

    for start in from..a.len() {
        if !a[start].same_keystroke(first) {
            continue;
        }

        let mut matched = 1;
        let mut pos = start + 1;
        while matched < pattern.len() && pos < a.len() {
            if a[pos].is_keyboard() {
                if !a[pos].same_keystroke(&pattern[matched]) {
                    break;
                }
                matched += 1;
            }
            pos += 1;
        }

        if matched == pattern.len() {
            return Some(start..pos);
        }
    }

    None
}

/// Merge/optimize runner with optional cancellation and progress.
pub struct MergeOptimizer<'s, R> {
    settings: &'s HumanizationSettings,
    rng: R,
    mode: MatchMode,
    cancel: Option<CancelToken>,
}

impl<'s, R: Rng> MergeOptimizer<'s, R> {
    pub fn new(settings: &'s HumanizationSettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            mode: MatchMode::default(),
            cancel: None,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check `token` between motifs and inside each humanize call.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Build the optimized recording from `a`, using `b` to discover motifs.
    ///
    /// Progress is reported after each motif as `(done / motifs) * 100`,
    /// followed by a final 100.
    ///
    /// # Errors
    ///
    /// Returns [`HumanizeError::Cancelled`] if the cancel token is set.
    pub fn run<F>(
        &mut self,
        a: &[Command],
        b: &[Command],
        mut on_progress: F,
    ) -> Result<Vec<Command>, HumanizeError>
    where
        F: FnMut(f64),
    {
        let patterns = find_common_sequences(a, b);
        let total = patterns.len();

        let mut out = Vec::with_capacity(a.len());
        let mut cursor = 0;
        let mut applied = 0;

        for (index, pattern) in patterns.iter().enumerate() {
            if let Some(token) = &self.cancel {
                if token.is_cancelled() {
                    return Err(HumanizeError::Cancelled {
                        processed: index,
                        total,
                    });
                }
            }

            let located = match self.mode {
                MatchMode::Contiguous => locate_contiguous(a, cursor, pattern),
                MatchMode::Interleaved => locate_interleaved(a, cursor, pattern),
            };

            match located {
                Some(span) => {
                    trace!(index, start = span.start, end = span.end, "motif located");
                    out.extend_from_slice(&a[cursor..span.start]);

                    let mut humanizer = Humanizer::new(self.settings, &mut self.rng);
                    if let Some(token) = &self.cancel {
                        humanizer = humanizer.with_cancel(token.clone());
                    }
                    out.extend(humanizer.run(&a[span.clone()], |_| {})?);

                    cursor = span.end;
                    applied += 1;
                }
                None => trace!(index, len = pattern.len(), "motif not found after cursor"),
            }

            on_progress((index + 1) as f64 / total as f64 * 100.0);
        }

        out.extend_from_slice(&a[cursor..]);
        on_progress(100.0);

        debug!(
            patterns = total,
            applied,
            mode = ?self.mode,
            output = out.len(),
            "merge/optimize finished"
        );

        Ok(out)
    }
}

/// Merge/optimize with contiguous motif matching.
pub fn merge_and_optimize<R: Rng + ?Sized>(
    a: &[Command],
    b: &[Command],
    settings: &HumanizationSettings,
    rng: &mut R,
) -> Vec<Command> {
    // Without a cancel token there is no way for run() to fail
    MergeOptimizer::new(settings, rng)
        .run(a, b, |_| {})
        .unwrap_or_else(|_| a.to_vec())
}

/// Merge/optimize allowing delays and mouse commands between a motif's keystrokes.
pub fn merge_and_optimize_interleaved<R: Rng + ?Sized>(
    a: &[Command],
    b: &[Command],
    settings: &HumanizationSettings,
    rng: &mut R,
) -> Vec<Command> {
    MergeOptimizer::new(settings, rng)
        .with_mode(MatchMode::Interleaved)
        .run(a, b, |_| {})
        .unwrap_or_else(|_| a.to_vec())
}
