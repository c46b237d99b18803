//! Humanize command handler

use std::path::Path;

use anyhow::Result;

use mcrkit::cli::{HumanizeArgs, OutputArgs};
use mcrkit::config::validate_settings;
use mcrkit::files::OutputTarget;
use mcrkit::mcr::{duration, remove_mouse, HumanizationSettings, Humanizer, MacroFile};
use mcrkit::progress::ProgressReporter;
use mcrkit::Config;

use super::{format_duration_ms, install_cancel_handler, load_input, make_rng, write_output};

/// Config defaults overlaid with CLI flags, then validated.
pub fn resolve_settings(config: &Config, args: &HumanizeArgs) -> Result<HumanizationSettings> {
    let mut settings = config.humanization.clone();
    args.apply(&mut settings);
    validate_settings(&settings)?;
    Ok(settings)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(
    path: &Path,
    args: &HumanizeArgs,
    seed: Option<u64>,
    output: &OutputArgs,
    quiet: bool,
) -> Result<()> {
    let config = Config::load()?;
    let settings = resolve_settings(&config, args)?;
    let file = load_input(path, &config)?;

    let mut commands = file.commands;
    if settings.remove_mouse_on_upload {
        let before = commands.len();
        commands = remove_mouse(&commands);
        println!("Removed {} mouse commands", before - commands.len());
    }

    let token = install_cancel_handler()?;
    let mut progress = if quiet {
        ProgressReporter::quiet("Humanizing")
    } else {
        ProgressReporter::new("Humanizing")
    };
    progress.start(commands.len(), "command");

    let mut rng = make_rng(seed);
    let result = Humanizer::new(&settings, &mut rng)
        .with_cancel(token)
        .run(&commands, |p| {
            progress.update(p);
        });

    let humanized = match result {
        Ok(humanized) => humanized,
        Err(e) => {
            progress.abandon();
            return Err(e.into());
        }
    };

    progress.finish(&format!(
        "Humanized {} -> {} commands, duration {} -> {}",
        commands.len(),
        humanized.len(),
        format_duration_ms(duration(&commands)),
        format_duration_ms(duration(&humanized))
    ));

    let target = OutputTarget::resolve(
        path,
        output.output.as_deref(),
        output.in_place,
        &config.output.prefix,
    );
    write_output(&target, &MacroFile::new(humanized), &config)
}
