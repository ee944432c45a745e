//! Command handlers for the EDL CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod capture;
pub mod completions;
pub mod config;
pub mod cut;
pub mod grab;
pub mod list;

use anyhow::{Context, Result};

use edl::cli::InputArgs;
use edl::edl::{Event, TransitionKind};
use edl::{Config, List, Parser};

/// Parse the EDL named on the command line.
///
/// `--fps` wins over the configured frame rate. Skipped lines are logged as
/// warnings by the parser, only a fatal error fails the command.
pub fn load_list(input: &InputArgs, config: &Config) -> Result<List> {
    let fps = input.fps.unwrap_or(config.parser.fps);
    let output = Parser::new(fps)
        .parse_file(&input.file)
        .with_context(|| format!("Failed to parse EDL: {}", input.file.display()))?;
    Ok(output.list)
}

/// The edit column of an event as it is written in an EDL (`C`, `D`, `W001`, `K`).
pub fn edit_code(event: &Event) -> String {
    match event.transition.as_ref().map(|t| &t.kind) {
        None => "C".to_string(),
        Some(TransitionKind::Dissolve) => "D".to_string(),
        Some(TransitionKind::Wipe { smpte_wipe_index }) => format!("W{}", smpte_wipe_index),
        Some(TransitionKind::Key) => "K".to_string(),
    }
}
