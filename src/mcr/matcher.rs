//! Greedy common-motif finder.
//!
//! Both recordings are reduced to their keyboard commands before comparison.
//! For each start `i` in A (ascending) and each start `j` in B (ascending)
//! the run of equal keystrokes is measured. The first run of at least
//! [`MIN_PATTERN_LEN`] found for a given `i` is taken, the scan in A resumes
//! right after it, and no other start in B is tried for that `i`.
//!
//! This is deliberately not a longest-common-subsequence search. Overlapping
//! or longer alternatives at the same start are never explored, and a
//! pattern whose (key, action) signature was already recorded is skipped
//! while still consuming its run in A. Patterns come back in discovery order.

use std::collections::HashSet;

use tracing::debug;

use super::types::{Command, KeyAction};

/// Shortest run of shared keystrokes that counts as a pattern.
pub const MIN_PATTERN_LEN: usize = 3;

fn keyboard_only(commands: &[Command]) -> Vec<&Command> {
    commands.iter().filter(|c| c.is_keyboard()).collect()
}

fn signature<'a>(run: &[&'a Command]) -> Vec<(&'a str, KeyAction)> {
    run.iter()
        .filter_map(|&c| match c {
            Command::Keyboard { key, action } => Some((key.as_str(), *action)),
            _ => None,
        })
        .collect()
}

/// Length of the run of equal keystrokes starting at `a[i]` and `b[j]`.
fn run_length(a: &[&Command], i: usize, b: &[&Command], j: usize) -> usize {
    a[i..]
        .iter()
        .zip(&b[j..])
        .take_while(|(x, y)| x.same_keystroke(y))
        .count()
}

/// Find keyboard patterns of A that also occur in B.
///
/// Each returned pattern is a keyboard-only sequence copied from A.
pub fn find_common_sequences(a: &[Command], b: &[Command]) -> Vec<Vec<Command>> {
    let keys_a = keyboard_only(a);
    let keys_b = keyboard_only(b);

    let mut patterns = Vec::new();
    if keys_a.len() < MIN_PATTERN_LEN || keys_b.len() < MIN_PATTERN_LEN {
        return patterns;
    }

    let mut seen: HashSet<Vec<(&str, KeyAction)>> = HashSet::new();
    let mut i = 0;

    while i + MIN_PATTERN_LEN <= keys_a.len() {
        let mut advance = 1;

        for j in 0..=(keys_b.len() - MIN_PATTERN_LEN) {
            let k = run_length(&keys_a, i, &keys_b, j);
            if k >= MIN_PATTERN_LEN {
                let run = &keys_a[i..i + k];
                if seen.insert(signature(run)) {
                    patterns.push(run.iter().map(|c| (*c).clone()).collect());
                }
                advance = k;
                break;
            }
        }

        i += advance;
    }

    debug!(
        keyboard_a = keys_a.len(),
        keyboard_b = keys_b.len(),
        patterns = patterns.len(),
        "common sequence search finished"
    );

    patterns
}
