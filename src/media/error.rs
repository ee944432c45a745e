//! Media tool errors.

use std::path::PathBuf;

/// Errors that can occur while cutting segments or grabbing frames.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Source has no file name: {path}")]
    InvalidSource { path: PathBuf },

    #[error("{program} not found. Install ffmpeg or set media.ffmpeg_bin in the config.")]
    ToolNotFound { program: String },

    #[error("{program} failed ({status}): {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run media tool: {0}")]
    Io(#[from] std::io::Error),
}
