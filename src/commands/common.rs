//! Common command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use mcrkit::mcr::{find_common_sequences, Command, KeyAction, MacroFile};
use mcrkit::Config;

use super::{load_input, truncate_string};

const PREVIEW_WIDTH: usize = 60;

/// `+A -A +B` style summary of a keyboard pattern.
pub fn describe_pattern(pattern: &[Command]) -> String {
    pattern
        .iter()
        .filter_map(|c| match c {
            Command::Keyboard { key, action } => Some(match action {
                KeyAction::Down => format!("+{}", key),
                KeyAction::Up => format!("-{}", key),
            }),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// File name for the `index`-th (zero-based) exported pattern.
pub fn pattern_file_name(index: usize) -> String {
    format!("pattern_{:02}.mcr", index + 1)
}

/// Write each pattern to `dir/pattern_NN.mcr`, returning the written paths.
pub fn export_patterns(dir: &Path, patterns: &[Vec<Command>]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(patterns.len());
    for (index, pattern) in patterns.iter().enumerate() {
        let path = dir.join(pattern_file_name(index));
        MacroFile::new(pattern.clone()).write(&path)?;
        written.push(path);
    }
    Ok(written)
}

#[derive(Serialize)]
struct PatternJson<'a> {
    index: usize,
    length: usize,
    commands: &'a [Command],
}

#[cfg(not(tarpaulin_include))]
pub fn handle(path_a: &Path, path_b: &Path, json: bool, export: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let a = load_input(path_a, &config)?;
    let b = load_input(path_b, &config)?;

    let patterns = find_common_sequences(&a.commands, &b.commands);

    if json {
        let out: Vec<PatternJson> = patterns
            .iter()
            .enumerate()
            .map(|(index, p)| PatternJson {
                index: index + 1,
                length: p.len(),
                commands: p,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("Failed to serialize patterns")?
        );
    } else if patterns.is_empty() {
        println!("No common patterns found");
    } else {
        println!("Found {} common pattern(s):", patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            println!(
                "  {:>3}. [{:>3} keys] {}",
                index + 1,
                pattern.len(),
                truncate_string(&describe_pattern(pattern), PREVIEW_WIDTH)
            );
        }
    }

    if let Some(dir) = export {
        let written = export_patterns(dir, &patterns)?;
        eprintln!("Exported {} pattern(s) to {}", written.len(), dir.display());
    }

    Ok(())
}
