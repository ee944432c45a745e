//! Frame-exact timecode at a fixed, integer frame rate.
//!
//! EDLs carry no frame rate of their own, so every [`Timecode`] is created
//! against the rate the caller passes to the parser. Values are stored as an
//! absolute frame count, which keeps arithmetic exact:
//!
//! - `Timecode - Timecode` yields a signed frame count
//! - `Timecode + i64` / `Timecode - i64` shift by whole frames
//! - ordering compares frame counts
//!
//! Drop-frame timecode is not supported.
//!
//! # Example
//!
//! ```
//! use edl::Timecode;
//!
//! let start = Timecode::parse("01:00:00:00", 25)?;
//! let end = start + 43;
//! assert_eq!(end.to_string(), "01:00:01:18");
//! assert_eq!(end - start, 43);
//! # Ok::<(), edl::TimecodeError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

/// Frame rate used when none is given.
pub const DEFAULT_FPS: u32 = 25;

static TIMECODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{1,2}):(\d{1,2}):(\d{1,2})$").expect("timecode pattern is valid")
});

/// Errors raised while building or parsing a timecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    #[error("Invalid timecode format: '{input}'")]
    InvalidFormat { input: String },

    #[error("There can be no more than {max} frames @{max}, got {value}")]
    FrameOutOfRange { value: u32, max: u32 },

    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        component: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Frame rate must be positive")]
    ZeroFrameRate,
}

/// A point in time expressed in frames at a nominal frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    frames: i64,
    fps: u32,
}

impl Timecode {
    /// Build a timecode from its `HH:MM:SS:FF` components.
    ///
    /// # Errors
    ///
    /// Fails if the frame rate is zero, minutes or seconds are 60 or more,
    /// or the frame component does not fit into one second at `fps`.
    pub fn new(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        fps: u32,
    ) -> Result<Self, TimecodeError> {
        if fps == 0 {
            return Err(TimecodeError::ZeroFrameRate);
        }
        if minutes > 59 {
            return Err(TimecodeError::InvalidComponent {
                component: "minutes",
                value: minutes,
                max: 59,
            });
        }
        if seconds > 59 {
            return Err(TimecodeError::InvalidComponent {
                component: "seconds",
                value: seconds,
                max: 59,
            });
        }
        if frames >= fps {
            return Err(TimecodeError::FrameOutOfRange {
                value: frames,
                max: fps,
            });
        }

        let total_seconds =
            i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds);
        Ok(Self {
            frames: total_seconds * i64::from(fps) + i64::from(frames),
            fps,
        })
    }

    /// Parse an `HH:MM:SS:FF` token. Each component may have one or two digits.
    pub fn parse(text: &str, fps: u32) -> Result<Self, TimecodeError> {
        let caps = TIMECODE_PATTERN
            .captures(text.trim())
            .ok_or_else(|| TimecodeError::InvalidFormat {
                input: text.to_string(),
            })?;

        // Two-digit groups always fit into a u32.
        let part = |i: usize| caps[i].parse::<u32>().unwrap_or_default();
        Self::new(part(1), part(2), part(3), part(4), fps)
    }

    /// Build a timecode from an absolute frame count.
    pub fn from_frames(frames: i64, fps: u32) -> Self {
        Self { frames, fps }
    }

    /// The zero point at the given frame rate.
    pub fn zero(fps: u32) -> Self {
        Self::from_frames(0, fps)
    }

    pub fn total_frames(&self) -> i64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_zero(&self) -> bool {
        self.frames == 0
    }

    /// Render as `HH:MM:SS.mmm`, the position syntax media tools accept.
    pub fn as_clock_time(&self) -> String {
        let fps = i64::from(self.fps.max(1));
        let sign = if self.frames < 0 { "-" } else { "" };
        let frames = self.frames.abs();
        let whole_seconds = frames / fps;
        let millis = (frames % fps) * 1000 / fps;
        format!(
            "{}{:02}:{:02}:{:02}.{:03}",
            sign,
            whole_seconds / 3600,
            (whole_seconds / 60) % 60,
            whole_seconds % 60,
            millis
        )
    }

    fn components(&self) -> (i64, i64, i64, i64) {
        let fps = i64::from(self.fps.max(1));
        let frames = self.frames.abs();
        let whole_seconds = frames / fps;
        (
            whole_seconds / 3600,
            (whole_seconds / 60) % 60,
            whole_seconds % 60,
            frames % fps,
        )
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::zero(DEFAULT_FPS)
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frames
            .cmp(&other.frames)
            .then_with(|| self.fps.cmp(&other.fps))
    }
}

impl Add<i64> for Timecode {
    type Output = Timecode;

    fn add(self, frames: i64) -> Timecode {
        Timecode::from_frames(self.frames + frames, self.fps)
    }
}

impl Sub<i64> for Timecode {
    type Output = Timecode;

    fn sub(self, frames: i64) -> Timecode {
        Timecode::from_frames(self.frames - frames, self.fps)
    }
}

impl Sub for Timecode {
    type Output = i64;

    /// Distance between two timecodes in frames.
    fn sub(self, other: Timecode) -> i64 {
        self.frames - other.frames
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, fr) = self.components();
        if self.frames < 0 {
            write!(f, "-")?;
        }
        write!(f, "{:02}:{:02}:{:02}:{:02}", h, m, s, fr)
    }
}

impl Serialize for Timecode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
