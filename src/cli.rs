//! CLI definitions for mcrkit
//!
//! The clap structure lives in the library so tests can parse argument
//! lists without spawning the binary.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::mcr::HumanizationSettings;

/// Green headers and literals, light gray descriptions.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "mcrkit")]
#[command(about = "[ mcrkit ] - inspect, clean, lengthen, humanize and merge MCR macro recordings")]
#[command(
    long_about = "mcrkit - a toolkit for MCR macro recordings.

MCR files are line-based recordings of keyboard, mouse and timing events:

    Keyboard : A : KeyDown
    DELAY : 120
    Keyboard : A : KeyUp
    Mouse : 640 : 480 : Move

QUICK START:
    mcrkit stats login.mcr                      Show counts and duration
    mcrkit humanize login.mcr                   Write humanized_login.mcr
    mcrkit lengthen login.mcr --target-ms 60000 Repeat to at least one minute
    mcrkit merge a.mcr b.mcr -o merged.mcr      Humanize the motifs A shares with B

Defaults for humanization live in ~/.config/mcrkit/config.toml.
Set MCRKIT_LOG (e.g. MCRKIT_LOG=debug) for diagnostic output."
)]
#[command(version, styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to write a transformed file.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output file (default: <prefix><name> next to the input)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file (a .bak backup is kept)
    #[arg(long)]
    pub in_place: bool,
}

/// Humanization overrides; anything unset falls back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct HumanizeArgs {
    /// Delay jitter amplitude in percent (1-100)
    #[arg(long, value_name = "PCT")]
    pub delay_variation: Option<f64>,

    /// Chance of a typo per key press in percent (0-10)
    #[arg(long, value_name = "PCT")]
    pub typing_errors: Option<f64>,

    /// Chance of a pause before a keystroke in percent (0-50)
    #[arg(long, value_name = "PCT")]
    pub hesitation: Option<f64>,

    /// Keep the command layout (no filler delays)
    #[arg(long, value_name = "BOOL")]
    pub preserve_structure: Option<bool>,

    /// Drop every keyboard command for this key (repeatable)
    #[arg(long = "exclude", value_name = "KEY")]
    pub exclude: Vec<String>,

    /// Remove mouse commands before humanizing
    #[arg(long)]
    pub remove_mouse: bool,
}

impl HumanizeArgs {
    /// Overlay the flags that were given onto `settings`.
    pub fn apply(&self, settings: &mut HumanizationSettings) {
        if let Some(v) = self.delay_variation {
            settings.delay_variation_pct = v;
        }
        if let Some(v) = self.typing_errors {
            settings.typing_errors_pct = v;
        }
        if let Some(v) = self.hesitation {
            settings.hesitation_pauses_pct = v;
        }
        if let Some(v) = self.preserve_structure {
            settings.preserve_structure = v;
        }
        settings.excluded_keys.extend(self.exclude.iter().cloned());
        if self.remove_mouse {
            settings.remove_mouse_on_upload = true;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show command counts, duration and size
    #[command(long_about = "Show statistics for an MCR file.

Counts commands by kind and sums every delay into the playback duration.
Lines that are not keyboard, mouse or delay commands are ignored.

EXAMPLES:
    mcrkit stats login.mcr
    mcrkit stats login.mcr --json")]
    Stats {
        /// Path to the .mcr file
        file: PathBuf,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove mouse commands and/or zero-length delays
    #[command(long_about = "Remove mouse commands and/or zero-length delays.

At least one of --mouse and --zero-delays is required. Everything else
is kept in its original order.

EXAMPLES:
    mcrkit clean login.mcr --mouse
    mcrkit clean login.mcr --mouse --zero-delays --in-place
    mcrkit clean login.mcr --zero-delays -o clean.mcr")]
    Clean {
        /// Path to the .mcr file
        file: PathBuf,
        /// Drop every mouse command
        #[arg(long)]
        mouse: bool,
        /// Drop delays of exactly 0 ms
        #[arg(long)]
        zero_delays: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Repeat a recording until it lasts at least a target duration
    #[command(long_about = "Repeat the whole recording until its duration reaches a target.

The recording is repeated ceil(target / duration) times, so the result
may overshoot the target. Files with no delays cannot be lengthened and
files already long enough are written unchanged.

EXAMPLES:
    mcrkit lengthen farm.mcr --target-ms 3600000
    mcrkit lengthen farm.mcr --target-ms 60000 --in-place")]
    Lengthen {
        /// Path to the .mcr file
        file: PathBuf,
        /// Minimum duration of the result in milliseconds
        #[arg(long, value_name = "MS", allow_negative_numbers = true)]
        target_ms: i64,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Add timing jitter, hesitation, typos and filler delays
    #[command(long_about = "Humanize an MCR recording.

Delays are jittered, keystrokes may be preceded by short pauses, key
presses may be followed by a neighbouring-key typo corrected with
Backspace, and (with --preserve-structure false) short filler delays are
added between commands. Settings come from the config file and can be
overridden per run.

Press Ctrl-C to cancel; nothing is written for a cancelled run.

EXAMPLES:
    mcrkit humanize login.mcr
    mcrkit humanize login.mcr --typing-errors 5 --hesitation 30
    mcrkit humanize login.mcr --exclude F12 --remove-mouse --seed 42
    mcrkit humanize login.mcr --preserve-structure false -o out.mcr")]
    Humanize {
        /// Path to the .mcr file
        file: PathBuf,
        #[command(flatten)]
        settings: HumanizeArgs,
        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List keyboard patterns shared by two recordings
    #[command(long_about = "Find keyboard patterns that two recordings share.

Only keyboard commands are compared. Each pattern is at least three
keystrokes long and is reported in the order it was found in FILE_A.
--export writes every pattern as its own pattern_NN.mcr file.

EXAMPLES:
    mcrkit common a.mcr b.mcr
    mcrkit common a.mcr b.mcr --json
    mcrkit common a.mcr b.mcr --export patterns/")]
    Common {
        /// Recording whose patterns are reported
        file_a: PathBuf,
        /// Recording to compare against
        file_b: PathBuf,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
        /// Write each pattern to DIR/pattern_NN.mcr
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// Humanize the parts of one recording that another shares
    #[command(long_about = "Merge/optimize two recordings.

The output is built from FILE_A only. Patterns shared with FILE_B are
located in FILE_A and replaced by humanized copies; everything else is
kept as is. By default a pattern must appear as adjacent keystrokes, so
recordings with delays between keystrokes are usually returned unchanged.
--interleaved allows delays and mouse commands between the keystrokes.

EXAMPLES:
    mcrkit merge a.mcr b.mcr -o merged.mcr
    mcrkit merge a.mcr b.mcr -o merged.mcr --interleaved --seed 7")]
    Merge {
        /// Recording the output is built from
        file_a: PathBuf,
        /// Recording used to discover shared patterns
        file_b: PathBuf,
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
        /// Allow non-keyboard commands between a pattern's keystrokes
        #[arg(long)]
        interleaved: bool,
        #[command(flatten)]
        settings: HumanizeArgs,
        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Restore a file from its .bak backup
    #[command(long_about = "Restore a file from the backup made by an --in-place run.

The backup is deleted after a successful restore.

EXAMPLE:
    mcrkit restore login.mcr")]
    Restore {
        /// File to restore
        file: PathBuf,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the mcrkit configuration file.

Configuration is stored in ~/.config/mcrkit/config.toml and holds the
default humanization settings, output naming and input size limit.

EXAMPLES:
    mcrkit config show       Display the effective configuration
    mcrkit config path       Print the config file location
    mcrkit config init       Write a config file with defaults
    mcrkit config edit       Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Open configuration in $EDITOR
    Edit,
}
