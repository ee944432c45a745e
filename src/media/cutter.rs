//! Chop an offline edit into one movie per event.

use std::path::{Path, PathBuf};

use tracing::info;

use super::error::MediaError;
use super::ffmpeg::{FfmpegCommand, DEFAULT_FFMPEG_BIN};
use super::SegmentCutter;
use crate::edl::Event;
use crate::timecode::Timecode;

/// Codec used for the cut segments unless configured otherwise.
pub const DEFAULT_VIDEO_CODEC: &str = "mjpeg";

/// Cuts segments out of a rendered movie of the whole edit with ffmpeg.
///
/// Segments are written next to the source as `{num}_{source file name}`.
#[derive(Debug)]
pub struct FfmpegCutter {
    source: PathBuf,
    source_name: String,
    ffmpeg_bin: String,
    video_codec: String,
    dry_run: bool,
    commands: Vec<FfmpegCommand>,
}

impl FfmpegCutter {
    /// # Errors
    /// `MediaError::InvalidSource` if the path has no file name.
    pub fn new(source: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let source = source.into();
        let source_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| MediaError::InvalidSource {
                path: source.clone(),
            })?;
        Ok(Self {
            source,
            source_name,
            ffmpeg_bin: DEFAULT_FFMPEG_BIN.to_string(),
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            dry_run: false,
            commands: Vec::new(),
        })
    }

    pub fn with_ffmpeg_bin(mut self, bin: impl Into<String>) -> Self {
        self.ffmpeg_bin = bin.into();
        self
    }

    pub fn with_video_codec(mut self, codec: impl Into<String>) -> Self {
        self.video_codec = codec.into();
        self
    }

    /// Only record commands, never run them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Every command issued so far, in order.
    pub fn commands(&self) -> &[FfmpegCommand] {
        &self.commands
    }

    pub fn destination_for(&self, event: &Event) -> PathBuf {
        self.source
            .with_file_name(format!("{}_{}", event.num, self.source_name))
    }

    pub fn command_for(&self, event: &Event, start: Timecode, end: Timecode) -> FfmpegCommand {
        FfmpegCommand::new(&self.ffmpeg_bin)
            .arg("-i")
            .arg(path_arg(&self.source))
            .arg("-ss")
            .arg(start.as_clock_time())
            .arg("-vframes")
            .arg((end - start).to_string())
            .arg("-vcodec")
            .arg(&self.video_codec)
            .arg("-acodec")
            .arg("copy")
            .arg("-y")
            .arg(path_arg(&self.destination_for(event)))
    }
}

impl SegmentCutter for FfmpegCutter {
    fn cut_segment(&mut self, event: &Event, start: Timecode, end: Timecode) -> Result<(), MediaError> {
        info!(num = %event.num, %start, %end, "Cutting segment");
        let command = self.command_for(event, start, end);
        if !self.dry_run {
            command.run()?;
        }
        self.commands.push(command);
        Ok(())
    }
}

pub(super) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
