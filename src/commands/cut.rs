//! Cut command handler

use anyhow::{Context, Result};
use std::path::Path;

use edl::cli::InputArgs;
use edl::media::{self, FfmpegCutter};
use edl::Config;

use super::load_list;

/// Cut a movie of the whole edit into one file per event.
///
/// With `dry_run` the ffmpeg commands are printed instead of run.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, source: &Path, dry_run: bool) -> Result<()> {
    let config = Config::load()?;
    let list = load_list(input, &config)?;

    let mut cutter = FfmpegCutter::new(source)?
        .with_ffmpeg_bin(&config.media.ffmpeg_bin)
        .with_video_codec(&config.media.video_codec)
        .dry_run(dry_run);
    let count = media::cut(&list, &mut cutter)
        .with_context(|| format!("Failed to cut {}", source.display()))?;

    if dry_run {
        for command in cutter.commands() {
            println!("{}", command.render());
        }
    } else {
        println!("Cut {} segment(s) from {}", count, source.display());
    }
    Ok(())
}
