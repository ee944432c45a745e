//! Grab command handler

use anyhow::{Context, Result};
use std::path::Path;

use edl::cli::InputArgs;
use edl::media::{self, FfmpegGrabber};
use edl::Config;

use super::load_list;

/// Grab one still per event from a movie of the whole edit.
///
/// `offset` overrides `media.grab_offset` from the config.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, source: &Path, offset: Option<i64>, dry_run: bool) -> Result<()> {
    let config = Config::load()?;
    let list = load_list(input, &config)?;
    let offset = offset.unwrap_or(config.media.grab_offset);

    let mut grabber = FfmpegGrabber::new(source)?
        .with_ffmpeg_bin(&config.media.ffmpeg_bin)
        .dry_run(dry_run);
    let count = media::grab(&list, &mut grabber, offset)
        .with_context(|| format!("Failed to grab frames from {}", source.display()))?;

    if dry_run {
        for command in grabber.commands() {
            println!("{}", command.render());
        }
    } else {
        println!("Grabbed {} frame(s) from {}", count, source.display());
    }
    Ok(())
}
