//! Thumbnails of the first frame of every event.

use std::path::PathBuf;

use tracing::info;

use super::cutter::path_arg;
use super::error::MediaError;
use super::ffmpeg::{FfmpegCommand, DEFAULT_FFMPEG_BIN};
use super::FrameGrabber;
use crate::edl::Event;
use crate::timecode::Timecode;

/// Grabs still frames from a rendered movie of the whole edit with ffmpeg.
///
/// Stills are written next to the source as `{num}_{source stem}1.jpg`
/// (ffmpeg expands the `%d` image sequence pattern).
#[derive(Debug)]
pub struct FfmpegGrabber {
    source: PathBuf,
    source_stem: String,
    ffmpeg_bin: String,
    dry_run: bool,
    commands: Vec<FfmpegCommand>,
}

impl FfmpegGrabber {
    /// # Errors
    /// `MediaError::InvalidSource` if the path has no file name.
    pub fn new(source: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let source = source.into();
        let source_stem = source
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| MediaError::InvalidSource {
                path: source.clone(),
            })?;
        Ok(Self {
            source,
            source_stem,
            ffmpeg_bin: DEFAULT_FFMPEG_BIN.to_string(),
            dry_run: false,
            commands: Vec::new(),
        })
    }

    pub fn with_ffmpeg_bin(mut self, bin: impl Into<String>) -> Self {
        self.ffmpeg_bin = bin.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn commands(&self) -> &[FfmpegCommand] {
        &self.commands
    }

    /// Output pattern for an event, including the `%d` sequence placeholder.
    pub fn destination_for(&self, event: &Event) -> PathBuf {
        self.source
            .with_file_name(format!("{}_{}%d.jpg", event.num, self.source_stem))
    }

    pub fn command_for(&self, event: &Event, at: Timecode) -> FfmpegCommand {
        FfmpegCommand::new(&self.ffmpeg_bin)
            .arg("-i")
            .arg(path_arg(&self.source))
            .arg("-an")
            .arg("-ss")
            .arg(at.as_clock_time())
            .arg("-vframes")
            .arg("1")
            .arg("-y")
            .arg(path_arg(&self.destination_for(event)))
    }
}

impl FrameGrabber for FfmpegGrabber {
    fn grab_frame(&mut self, event: &Event, at: Timecode) -> Result<(), MediaError> {
        info!(num = %event.num, %at, "Grabbing frame");
        let command = self.command_for(event, at);
        if !self.dry_run {
            command.run()?;
        }
        self.commands.push(command);
        Ok(())
    }
}
