//! Randomized humanization of recorded input.
//!
//! Commands are processed strictly in order. Each input command produces
//! zero or more output commands:
//!
//! 1. Keyboard commands whose key is excluded are dropped.
//! 2. A keyboard command may be preceded by a hesitation pause.
//! 3. Non-zero delays are jittered symmetrically around their value.
//! 4. A key-down may be followed by a typo on a neighbouring key, which is
//!    then erased with Backspace.
//! 5. Unless structure is preserved, a short filler delay follows every
//!    non-delay command except the last.
//!
//! Only the relative order of the surviving original commands is
//! guaranteed; the output length depends on the random source.
//!
//! # Determinism
//!
//! All randomness comes from the caller's [`Rng`]. Draws happen in a fixed
//! order per command (hesitation roll and length, delay jitter, typo roll,
//! wrong key, typo delays, filler), so a seeded generator reproduces the
//! same output.
//!
//! # Example
//!
//! ```
//! use mcrkit::mcr::{humanize, Command, HumanizationSettings};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let settings = HumanizationSettings::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let input = vec![Command::key_down("A"), Command::delay(100), Command::key_up("A")];
//!
//! let output = humanize(&input, &settings, &mut rng, |_| {});
//! assert!(output.len() >= input.len());
//! ```

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::thread;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::cancel::{CancelToken, HumanizeError};
use super::keyboard;
use super::types::Command;

/// Input commands processed between cooperative yield points.
pub const YIELD_INTERVAL: usize = 1000;

/// Hesitation pause inserted before a keystroke.
pub const HESITATION_MS: RangeInclusive<u64> = 50..=200;
/// Time the wrong key is held down.
pub const TYPO_HOLD_MS: RangeInclusive<u64> = 50..=150;
/// Time before the typo is noticed and erased.
pub const TYPO_NOTICE_MS: RangeInclusive<u64> = 100..=300;
/// Filler pause between commands when structure is not preserved.
pub const FILLER_MS: RangeInclusive<u64> = 5..=25;

/// Key used to erase an injected typo.
pub const CORRECTION_KEY: &str = "Backspace";

/// Humanization options.
///
/// Percentages are not range-checked here; see
/// [`config::validate_settings`](crate::config::validate_settings) for the
/// accepted bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanizationSettings {
    /// Symmetric jitter amplitude around each delay, in percent
    pub delay_variation_pct: f64,
    /// Chance per key-down of injecting a typo, in percent
    pub typing_errors_pct: f64,
    /// Chance per keystroke of a pause before it, in percent
    pub hesitation_pauses_pct: f64,
    /// Suppress filler delays between commands
    pub preserve_structure: bool,
    /// Keyboard keys dropped entirely (exact, case-sensitive match)
    pub excluded_keys: BTreeSet<String>,
    /// Caller-side policy: strip mouse commands before humanizing
    pub remove_mouse_on_upload: bool,
}

impl Default for HumanizationSettings {
    fn default() -> Self {
        Self {
            delay_variation_pct: 25.0,
            typing_errors_pct: 2.0,
            hesitation_pauses_pct: 15.0,
            preserve_structure: true,
            excluded_keys: BTreeSet::new(),
            remove_mouse_on_upload: false,
        }
    }
}

impl HumanizationSettings {
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_keys.contains(key)
    }
}

/// Streaming humanizer over a caller-supplied random source.
pub struct Humanizer<'s, R> {
    settings: &'s HumanizationSettings,
    rng: R,
    cancel: Option<CancelToken>,
}

impl<'s, R: Rng> Humanizer<'s, R> {
    pub fn new(settings: &'s HumanizationSettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            cancel: None,
        }
    }

    /// Check `token` at every yield point and abort when it is set.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Humanize `commands`, reporting progress after each input command.
    ///
    /// Progress is `(processed / total) * 100`, so the final report is 100.
    ///
    /// # Errors
    ///
    /// Returns [`HumanizeError::Cancelled`] if the cancel token is set when a
    /// yield point is reached.
    pub fn run<F>(
        &mut self,
        commands: &[Command],
        mut on_progress: F,
    ) -> Result<Vec<Command>, HumanizeError>
    where
        F: FnMut(f64),
    {
        let total = commands.len();
        let mut out = Vec::with_capacity(total);

        for (i, command) in commands.iter().enumerate() {
            let is_last = i + 1 == total;
            self.emit(command, is_last, &mut out);

            let processed = i + 1;
            on_progress(processed as f64 / total as f64 * 100.0);

            if processed % YIELD_INTERVAL == 0 {
                self.checkpoint(processed, total)?;
            }
        }

        debug!(input = total, output = out.len(), "humanized commands");
        Ok(out)
    }

    fn checkpoint(&self, processed: usize, total: usize) -> Result<(), HumanizeError> {
        thread::yield_now();
        trace!(processed, total, "humanize yield point");

        match &self.cancel {
            Some(token) if token.is_cancelled() => {
                warn!(processed, total, "humanize cancelled");
                Err(HumanizeError::Cancelled { processed, total })
            }
            _ => Ok(()),
        }
    }

    fn emit(&mut self, command: &Command, is_last: bool, out: &mut Vec<Command>) {
        if let Command::Keyboard { key, .. } = command {
            if self.settings.is_excluded(key) {
                return;
            }
            if self.roll(self.settings.hesitation_pauses_pct) {
                out.push(Command::delay(self.rng.gen_range(HESITATION_MS)));
            }
        }

        match command {
            // Zero delays carry nothing to jitter and consume no randomness
            Command::Delay { ms } if *ms > 0 => out.push(Command::delay(self.jitter(*ms))),
            other => out.push(other.clone()),
        }

        if command.is_key_down() && self.roll(self.settings.typing_errors_pct) {
            if let Some(key) = command.key() {
                self.inject_typo(key, out);
            }
        }

        if !self.settings.preserve_structure && !command.is_delay() && !is_last {
            out.push(Command::delay(self.rng.gen_range(FILLER_MS)));
        }
    }

    fn inject_typo(&mut self, key: &str, out: &mut Vec<Command>) {
        let Some(wrong) = keyboard::random_wrong_key(key, &mut self.rng) else {
            return;
        };

        out.push(Command::key_down(wrong));
        out.push(Command::delay(self.rng.gen_range(TYPO_HOLD_MS)));
        out.push(Command::key_up(wrong));
        out.push(Command::delay(self.rng.gen_range(TYPO_NOTICE_MS)));
        out.push(Command::key_down(CORRECTION_KEY));
        out.push(Command::key_up(CORRECTION_KEY));
    }

    fn roll(&mut self, pct: f64) -> bool {
        self.rng.gen::<f64>() < pct / 100.0
    }

    /// Uniform draw from `[ms * (1 - v), ms * (1 + v)]`, rounded, floored at zero.
    fn jitter(&mut self, ms: u64) -> u64 {
        let variation = self.settings.delay_variation_pct / 100.0;
        let base = ms as f64;
        let min = (base * (1.0 - variation)).max(0.0);
        let max = base * (1.0 + variation);
        if max == min {
            return ms;
        }
        (min + self.rng.gen::<f64>() * (max - min)).round() as u64
    }
}

/// Humanize `commands` without cancellation.
pub fn humanize<R, F>(
    commands: &[Command],
    settings: &HumanizationSettings,
    rng: &mut R,
    on_progress: F,
) -> Vec<Command>
where
    R: Rng + ?Sized,
    F: FnMut(f64),
{
    // Without a cancel token there is no way for run() to fail
    Humanizer::new(settings, rng)
        .run(commands, on_progress)
        .unwrap_or_default()
}
