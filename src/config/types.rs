//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::media::cutter::DEFAULT_VIDEO_CODEC;
use crate::media::ffmpeg::DEFAULT_FFMPEG_BIN;
use crate::timecode::DEFAULT_FPS;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

impl Config {
    /// Check values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.parser.fps == 0 {
            return Err("parser.fps must be > 0".to_string());
        }
        if self.media.ffmpeg_bin.trim().is_empty() {
            return Err("media.ffmpeg_bin must not be empty".to_string());
        }
        if self.media.video_codec.trim().is_empty() {
            return Err("media.video_codec must not be empty".to_string());
        }
        Ok(())
    }
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Frame rate for every timecode in a list (EDLs do not carry one)
    #[serde(default = "default_fps")]
    pub fps: u32,
}

pub fn default_fps() -> u32 {
    DEFAULT_FPS
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

/// Cutter and grabber configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_ffmpeg_bin")]
    pub ffmpeg_bin: String,
    #[serde(default = "default_video_codec")]
    pub video_codec: String,
    /// Frames into each event to take the thumbnail from
    #[serde(default)]
    pub grab_offset: i64,
}

pub fn default_ffmpeg_bin() -> String {
    DEFAULT_FFMPEG_BIN.to_string()
}

pub fn default_video_codec() -> String {
    DEFAULT_VIDEO_CODEC.to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            ffmpeg_bin: default_ffmpeg_bin(),
            video_codec: default_video_codec(),
            grab_offset: 0,
        }
    }
}
