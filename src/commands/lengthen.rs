//! Lengthen command handler

use std::path::Path;

use anyhow::Result;

use mcrkit::cli::OutputArgs;
use mcrkit::config::{validate_output_len, validate_target};
use mcrkit::files::OutputTarget;
use mcrkit::mcr::{repetitions_for, Lengthen};
use mcrkit::Config;

use super::{format_duration_ms, load_input, write_output};

/// One-line description of what lengthening will do.
pub fn describe(current_ms: u64, target_ms: u64) -> String {
    if current_ms == 0 {
        return "Recording has no delays (duration 0 ms); written unchanged".to_string();
    }
    match repetitions_for(current_ms, target_ms) {
        Some(n) => format!(
            "Repeating {} times: {} -> {} (target {})",
            n,
            format_duration_ms(current_ms),
            format_duration_ms(current_ms.saturating_mul(n)),
            format_duration_ms(target_ms)
        ),
        None => format!(
            "Already {} (target {}); written unchanged",
            format_duration_ms(current_ms),
            format_duration_ms(target_ms)
        ),
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, target_ms: i64, output: &OutputArgs) -> Result<()> {
    let config = Config::load()?;
    let target_ms = validate_target(target_ms)?;
    let mut file = load_input(path, &config)?;

    if let Some(reps) = repetitions_for(file.duration(), target_ms) {
        validate_output_len(file.len(), reps, &config.limits)?;
    }

    println!("{}", describe(file.duration(), target_ms));
    file.apply(&mut Lengthen::new(target_ms));

    let target = OutputTarget::resolve(
        path,
        output.output.as_deref(),
        output.in_place,
        &config.output.prefix,
    );
    write_output(&target, &file, &config)
}
