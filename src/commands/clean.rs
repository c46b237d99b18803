//! Clean command handler

use std::path::Path;

use anyhow::{bail, Result};

use mcrkit::cli::OutputArgs;
use mcrkit::files::OutputTarget;
use mcrkit::mcr::{RemoveMouse, RemoveZeroDelays, TransformChain};
use mcrkit::Config;

use super::{load_input, write_output};

/// Build the cleanup chain for the requested filters.
pub fn build_chain(mouse: bool, zero_delays: bool) -> Result<TransformChain> {
    if !mouse && !zero_delays {
        bail!("Nothing to clean: pass --mouse and/or --zero-delays");
    }
    Ok(TransformChain::new()
        .with_if(mouse, RemoveMouse)
        .with_if(zero_delays, RemoveZeroDelays))
}

#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, mouse: bool, zero_delays: bool, output: &OutputArgs) -> Result<()> {
    let config = Config::load()?;
    let mut chain = build_chain(mouse, zero_delays)?;
    let mut file = load_input(path, &config)?;

    let before = file.len();
    file.apply(&mut chain);
    let removed = before - file.len();

    println!(
        "Removed {} command{} ({} -> {})",
        removed,
        if removed == 1 { "" } else { "s" },
        before,
        file.len()
    );

    let target = OutputTarget::resolve(
        path,
        output.output.as_deref(),
        output.in_place,
        &config.output.prefix,
    );
    write_output(&target, &file, &config)
}
