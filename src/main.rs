//! mcrkit - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use mcrkit::cli::{Cli, Commands, ConfigCommands};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    mcrkit::logging::init(cli.verbose);

    match cli.command {
        Commands::Stats { file, json } => commands::stats::handle(&file, json),
        Commands::Clean {
            file,
            mouse,
            zero_delays,
            output,
        } => commands::clean::handle(&file, mouse, zero_delays, &output),
        Commands::Lengthen {
            file,
            target_ms,
            output,
        } => commands::lengthen::handle(&file, target_ms, &output),
        Commands::Humanize {
            file,
            settings,
            seed,
            output,
        } => commands::humanize::handle(&file, &settings, seed, &output, cli.quiet),
        Commands::Common {
            file_a,
            file_b,
            json,
            export,
        } => commands::common::handle(&file_a, &file_b, json, export.as_deref()),
        Commands::Merge {
            file_a,
            file_b,
            output,
            interleaved,
            settings,
            seed,
        } => commands::merge::handle(
            &file_a,
            &file_b,
            &output,
            interleaved,
            &settings,
            seed,
            cli.quiet,
        ),
        Commands::Restore { file } => commands::restore::handle(&file),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
