//! Merge command handler

use std::path::Path;

use anyhow::Result;

use mcrkit::cli::HumanizeArgs;
use mcrkit::files::OutputTarget;
use mcrkit::mcr::{MacroFile, MatchMode, MergeOptimizer};
use mcrkit::progress::ProgressReporter;
use mcrkit::Config;

use super::humanize::resolve_settings;
use super::{install_cancel_handler, load_input, make_rng, write_output};

pub fn match_mode(interleaved: bool) -> MatchMode {
    if interleaved {
        MatchMode::Interleaved
    } else {
        MatchMode::Contiguous
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(
    path_a: &Path,
    path_b: &Path,
    output: &Path,
    interleaved: bool,
    args: &HumanizeArgs,
    seed: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let config = Config::load()?;
    let settings = resolve_settings(&config, args)?;
    let a = load_input(path_a, &config)?;
    let b = load_input(path_b, &config)?;

    let token = install_cancel_handler()?;
    let mut progress = if quiet {
        ProgressReporter::quiet("Merging")
    } else {
        ProgressReporter::new("Merging")
    };
    // Progress advances per shared pattern, not per command
    progress.begin();

    let mut rng = make_rng(seed);
    let result = MergeOptimizer::new(&settings, &mut rng)
        .with_mode(match_mode(interleaved))
        .with_cancel(token)
        .run(&a.commands, &b.commands, |p| {
            progress.update(p);
        });

    let merged = match result {
        Ok(merged) => merged,
        Err(e) => {
            progress.abandon();
            return Err(e.into());
        }
    };

    if merged == a.commands {
        progress.finish("No shared patterns located in the first file; output equals input");
    } else {
        progress.finish(&format!(
            "Merged {} -> {} commands",
            a.len(),
            merged.len()
        ));
    }

    let target = OutputTarget::resolve(path_a, Some(output), false, &config.output.prefix);
    write_output(&target, &MacroFile::new(merged), &config)
}
