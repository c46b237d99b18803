//! Stats command handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use humansize::{format_size, BINARY};
use serde::Serialize;

use mcrkit::mcr::{CommandCounts, MacroFile};
use mcrkit::Config;

use super::{format_duration_ms, load_input};

/// Everything `mcrkit stats` reports about a file.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub file: String,
    pub size_bytes: u64,
    pub total_commands: usize,
    pub counts: CommandCounts,
    pub duration_ms: u64,
}

impl StatsReport {
    pub fn new(path: &Path, size_bytes: u64, file: &MacroFile) -> Self {
        let counts = file.counts();
        Self {
            file: path.display().to_string(),
            size_bytes,
            total_commands: counts.total(),
            counts,
            duration_ms: file.duration(),
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("File:     {}", self.file),
            format!("Size:     {}", format_size(self.size_bytes, BINARY)),
            format!(
                "Commands: {} (keyboard: {}, mouse: {}, delay: {})",
                self.total_commands, self.counts.keyboard, self.counts.mouse, self.counts.delay
            ),
            format!(
                "Duration: {} ms ({})",
                self.duration_ms,
                format_duration_ms(self.duration_ms)
            ),
        ];
        if self.total_commands == 0 {
            lines.push("No recognizable commands found".to_string());
        }
        lines.join("\n")
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let file = load_input(path, &config)?;
    let size = fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
        .len();

    let report = StatsReport::new(path, size, &file);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize stats")?
        );
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
