//! Command handlers for the mcrkit CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod clean;
pub mod common;
pub mod completions;
pub mod config;
pub mod humanize;
pub mod lengthen;
pub mod merge;
pub mod restore;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use mcrkit::files::{check_input, OutputTarget};
use mcrkit::mcr::{CancelToken, MacroFile};
use mcrkit::Config;

/// Check and decode an input file under the configured limits.
pub fn load_input(path: &Path, config: &Config) -> Result<MacroFile> {
    let info = check_input(path, config.limits.max_file_size_bytes())?;
    if !info.has_mcr_extension {
        eprintln!("Warning: File does not have .mcr extension");
    }

    let file = MacroFile::parse(path)
        .with_context(|| format!("Failed to parse macro file: {}", path.display()))?;
    debug!(
        path = %path.display(),
        bytes = info.size,
        commands = file.len(),
        "loaded input"
    );
    Ok(file)
}

/// Encode `file` to `target` and report where it went.
pub fn write_output(target: &OutputTarget, file: &MacroFile, config: &Config) -> Result<()> {
    let backup_created = target.write(&file.encode(), config.output.backup)?;

    match target {
        OutputTarget::InPlace(path) => {
            println!("File modified in-place: {}", path.display());
            if backup_created {
                println!("Backup saved to: {}.bak", path.display());
            }
        }
        OutputTarget::File(path) => println!("Output written to: {}", path.display()),
    }
    Ok(())
}

/// Seeded generator when a seed is given, otherwise one from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Cancel token tripped by Ctrl-C.
#[cfg(not(tarpaulin_include))]
pub fn install_cancel_handler() -> Result<CancelToken> {
    let token = CancelToken::new();
    let handle = token.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nReceived Ctrl-C, cancelling...");
        handle.cancel();
    })
    .context("Failed to install Ctrl-C handler")?;
    Ok(token)
}

/// Human-readable duration for a millisecond count.
pub fn format_duration_ms(ms: u64) -> String {
    if ms < 1_000 {
        return format!("{}ms", ms);
    }

    let total_secs = ms / 1_000;
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{:.1}s", ms as f64 / 1_000.0)
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
