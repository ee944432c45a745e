//! A single ffmpeg invocation.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use super::error::MediaError;

/// Default ffmpeg executable, resolved through `PATH`.
pub const DEFAULT_FFMPEG_BIN: &str = "ffmpeg";

/// Program plus arguments, kept as data so it can be shown or run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegCommand {
    program: String,
    args: Vec<String>,
}

impl FfmpegCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Shell-like rendering for display. Arguments containing whitespace
    /// are single-quoted.
    pub fn render(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|part| {
                if part.is_empty() || part.chars().any(char::is_whitespace) {
                    format!("'{}'", part.replace('\'', r"'\''"))
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion, failing on a non-zero exit.
    ///
    /// # Errors
    /// - `MediaError::ToolNotFound` - the program could not be started
    /// - `MediaError::ToolFailed` - the program exited unsuccessfully
    pub fn run(&self) -> Result<(), MediaError> {
        debug!(command = %self.render(), "Running media tool");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => MediaError::ToolNotFound {
                    program: self.program.clone(),
                },
                _ => MediaError::Io(e),
            })?;

        if output.status.success() {
            return Ok(());
        }

        // ffmpeg prints its banner first, the reason is on the last line
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("")
            .trim()
            .to_string();
        Err(MediaError::ToolFailed {
            program: self.program.clone(),
            status: output.status.to_string(),
            stderr: reason,
        })
    }
}
