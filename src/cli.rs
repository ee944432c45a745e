//! CLI definitions for EDL
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so completions and tests can build the command without running it.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use once_cell::sync::Lazy;

/// Build clap styles for the help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
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

static VERSION: Lazy<String> = Lazy::new(|| match option_env!("VERGEN_GIT_SHA") {
    Some(sha) if !cfg!(feature = "release") && !sha.is_empty() => {
        format!("{} ({})", env!("CARGO_PKG_VERSION"), sha)
    }
    _ => env!("CARGO_PKG_VERSION").to_string(),
});

/// Version string: crate version, plus the git commit for dev builds.
pub fn version() -> &'static str {
    VERSION.as_str()
}

#[derive(Parser)]
#[command(name = "edl")]
#[command(about = "[ EDL ] - read Edit Decision Lists and turn them into clip lists")]
#[command(
    long_about = "EDL - parse CMX 3600 style Edit Decision Lists.

Reads an EDL, reports the lines it could not make sense of, and prints the
events, optionally simplified (transitions unrolled, generators removed,
retimes expanded, contiguous events joined). Can also drive ffmpeg to cut
an offline movie of the edit into per-event segments or thumbnails.

QUICK START:
    edl list cut.edl                     Print all events
    edl list cut.edl --without-transitions --renumber
    edl capture cut.edl                  Source ranges to fetch
    edl grab cut.edl --source cut.mov    One still per event

Lines that cannot be parsed are reported on stderr and skipped. An event
with an unknown transition code stops the parse with a non-zero exit."
)]
#[command(version = version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Verbose logging (same as EDL_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads an EDL.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the EDL file
    #[arg(help = "Path to the EDL file")]
    pub file: PathBuf,
    /// Frame rate of the list (default: parser.fps from the config)
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Frame rate of the list [default: from config, 25]"
    )]
    pub fps: Option<u32>,
}

/// Transforms applied by `edl list`, in this order.
#[derive(Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Unroll dissolves, wipes and keys into cuts
    #[arg(long)]
    pub without_transitions: bool,
    /// Drop black, AX and GEN events
    #[arg(long)]
    pub without_generators: bool,
    /// Replace retimed source ranges with the range actually used
    #[arg(long)]
    pub without_timewarps: bool,
    /// Join events continuing the same source
    #[arg(long)]
    pub spliced: bool,
    /// Number events 001, 002, ...
    #[arg(long)]
    pub renumber: bool,
    /// Shift record timecodes so the first event starts at zero
    #[arg(long)]
    pub from_zero: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the events of an EDL
    #[command(long_about = "Parse an EDL and print its events.

Transforms are applied in the order listed below, whatever order the
flags are given in. Diagnostics for skipped lines go to stderr.

EXAMPLES:
    edl list cut.edl
    edl list cut.edl --fps 24
    edl list cut.edl --without-transitions --without-generators --renumber
    edl list cut.edl --json")]
    List {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        transforms: TransformArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the capture list of an EDL
    #[command(long_about = "Print the source ranges needed to rebuild the edit.

Generators are dropped, retimed events expanded to the source they really
use, contiguous events joined and the record side re-based to zero.

EXAMPLE:
    edl capture cut.edl")]
    Capture {
        #[command(flatten)]
        input: InputArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Cut a movie of the edit into one file per event
    #[command(long_about = "Cut a rendered movie of the whole edit into per-event files.

The movie must start at the first frame of the first event. Segments are
written next to it as <num>_<movie file name>.

EXAMPLES:
    edl cut cut.edl --source offline.mov
    edl cut cut.edl --source offline.mov --dry-run")]
    Cut {
        #[command(flatten)]
        input: InputArgs,
        /// Rendered movie of the edit
        #[arg(long, short)]
        source: PathBuf,
        /// Print the ffmpeg commands instead of running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Grab a still of every event from a movie of the edit
    #[command(long_about = "Grab one still per event from a rendered movie of the whole edit.

Stills are written next to the movie as <num>_<movie name>1.jpg.

EXAMPLES:
    edl grab cut.edl --source offline.mov
    edl grab cut.edl --source offline.mov --offset 12")]
    Grab {
        #[command(flatten)]
        input: InputArgs,
        /// Rendered movie of the edit
        #[arg(long, short)]
        source: PathBuf,
        /// Frames into each event to grab (default: media.grab_offset from the config)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i64>,
        /// Print the ffmpeg commands instead of running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script.

EXAMPLE:
    edl completions zsh > ~/.zfunc/_edl")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

EXAMPLE:
    edl config show")]
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    #[command(long_about = "Write ~/.config/edl/config.toml with default values.

An existing file is left untouched.

EXAMPLE:
    edl config init")]
    Init,
}
