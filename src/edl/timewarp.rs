//! Speed changes and reverses applied to an event (`M2` lines).
//!
//! For a forward clip the event's source start is the first frame used.
//! For a reversed clip it is the *last* frame used, so the captured range
//! extends backwards from it.

use serde::Serialize;

use super::event::Event;
use crate::timecode::Timecode;

/// Frames added to the start of a reversed capture range.
///
/// Matches the ranges existing conform tooling produces for reverses. Only
/// applied to reverses.
const REVERSE_COMPENSATION: i64 = 2;

/// A retime attached to exactly one [`Event`].
///
/// The timewarp holds no reference to its event. The math below borrows
/// the owning event for the duration of the call instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timewarp {
    /// Playback rate of the source in frames per second, negative when reversed
    pub actual_framerate: f64,
}

impl Timewarp {
    pub fn new(actual_framerate: f64) -> Self {
        Self { actual_framerate }
    }

    pub fn is_reverse(&self) -> bool {
        self.actual_framerate < 0.0
    }

    fn factor(&self, owner: &Event) -> f64 {
        self.actual_framerate / f64::from(owner.rec_start_tc.fps())
    }

    /// Speed relative to the record frame rate, negative for reverses.
    pub fn speed_in_percent(&self, owner: &Event) -> f64 {
        self.factor(owner) * 100.0
    }

    /// Source frames the retimed event consumes, transition included.
    ///
    /// Always positive and always rounded up: one spare frame is better than
    /// a frozen frame at the tail of the clip.
    pub fn actual_length_of_source(&self, owner: &Event) -> i64 {
        let target_len = owner.rec_length_with_transition() as f64;
        (target_len * self.factor(owner)).abs().ceil() as i64
    }

    /// First source frame used (inclusive).
    pub fn source_used_from(&self, owner: &Event) -> Timecode {
        if self.is_reverse() {
            owner.src_start_tc - self.actual_length_of_source(owner) + REVERSE_COMPENSATION
        } else {
            owner.src_start_tc
        }
    }

    /// End of the source frames used (exclusive).
    pub fn source_used_upto(&self, owner: &Event) -> Timecode {
        self.source_used_from(owner) + self.actual_length_of_source(owner)
    }
}
