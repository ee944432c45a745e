//! Edit events and their incoming transitions.

use std::fmt;

use serde::Serialize;

use super::timewarp::Timewarp;
use crate::timecode::Timecode;

/// Reels that carry no footage (black, auxiliary, generated media).
const GENERATOR_REELS: [&str; 3] = ["BL", "AX", "GEN"];

/// The kind of an incoming transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionKind {
    /// `D` in the edit column
    Dissolve,
    /// `W<index>` in the edit column, index kept as written (e.g. `"001"`)
    Wipe { smpte_wipe_index: String },
    /// `K` in the edit column
    Key,
}

/// How an event is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    #[serde(flatten)]
    pub kind: TransitionKind,
    /// Length of the transition in frames
    pub duration: u32,
    /// Effect label from a `* EFFECT NAME:` comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

impl Transition {
    pub fn new(kind: TransitionKind, duration: u32) -> Self {
        Self {
            kind,
            duration,
            effect: None,
        }
    }

    pub fn dissolve(duration: u32) -> Self {
        Self::new(TransitionKind::Dissolve, duration)
    }

    pub fn wipe(duration: u32, smpte_wipe_index: impl Into<String>) -> Self {
        Self::new(
            TransitionKind::Wipe {
                smpte_wipe_index: smpte_wipe_index.into(),
            },
            duration,
        )
    }

    pub fn key(duration: u32) -> Self {
        Self::new(TransitionKind::Key, duration)
    }

    /// SMPTE wipe pattern number, only present on wipes.
    pub fn smpte_wipe_index(&self) -> Option<&str> {
        match &self.kind {
            TransitionKind::Wipe { smpte_wipe_index } => Some(smpte_wipe_index),
            TransitionKind::Dissolve | TransitionKind::Key => None,
        }
    }
}

/// One edit event of an EDL.
///
/// Source timecodes are as written in the list: no timewarp or transition
/// is folded in. Use the `capture_*` queries to learn which source frames
/// the event really consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Event {
    /// Event number as written. Not guaranteed numeric (`"012A"`).
    pub num: String,
    pub reel: String,
    pub track: String,
    pub src_start_tc: Timecode,
    pub src_end_tc: Timecode,
    pub rec_start_tc: Timecode,
    /// Record end, the outgoing transition is not included
    pub rec_end_tc: Timecode,
    /// Comment lines attached to this event, in file order.
    ///
    /// Clip name, effect name and unmarked vendor lines are kept verbatim.
    /// Plain `* ` comments are stored without their marker.
    pub comments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_name: Option<String>,
    /// Incoming transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timewarp: Option<Timewarp>,
    /// Frames the next event's transition takes from this one
    pub outgoing_transition_duration: u32,
    /// 1-based line in the source document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl Event {
    pub fn new(
        num: impl Into<String>,
        reel: impl Into<String>,
        track: impl Into<String>,
        src_start_tc: Timecode,
        src_end_tc: Timecode,
        rec_start_tc: Timecode,
        rec_end_tc: Timecode,
    ) -> Self {
        Self {
            num: num.into(),
            reel: reel.into(),
            track: track.into(),
            src_start_tc,
            src_end_tc,
            rec_start_tc,
            rec_end_tc,
            ..Default::default()
        }
    }

    /// A fresh event carrying only number, reel, track and the four
    /// timecodes. Comments, transitions and timewarps are left behind.
    pub fn copy_properties(&self) -> Event {
        Event::new(
            self.num.clone(),
            self.reel.clone(),
            self.track.clone(),
            self.src_start_tc,
            self.src_end_tc,
            self.rec_start_tc,
            self.rec_end_tc,
        )
    }

    /// Frames the event occupies in the record, without the outgoing transition.
    pub fn rec_length(&self) -> i64 {
        self.rec_end_tc - self.rec_start_tc
    }

    /// Frames the event occupies in the record, outgoing transition included.
    pub fn rec_length_with_transition(&self) -> i64 {
        self.rec_length() + i64::from(self.outgoing_transition_duration)
    }

    /// Source frames needed to complete this event, timewarps and transitions included.
    pub fn src_length(&self) -> i64 {
        match &self.timewarp {
            Some(tw) => tw.actual_length_of_source(self),
            None => self.rec_length_with_transition(),
        }
    }

    pub fn capture_length(&self) -> i64 {
        self.src_length()
    }

    /// First source frame to capture (inclusive).
    pub fn capture_from_tc(&self) -> Timecode {
        match &self.timewarp {
            Some(tw) => tw.source_used_from(self),
            None => self.src_start_tc,
        }
    }

    /// End of the source range to capture (exclusive).
    pub fn capture_to_tc(&self) -> Timecode {
        match &self.timewarp {
            Some(tw) => tw.source_used_upto(self),
            None => self.src_end_tc + i64::from(self.outgoing_transition_duration),
        }
    }

    /// Last source frame to capture (inclusive).
    pub fn capture_to_and_including_tc(&self) -> Timecode {
        self.capture_to_tc() - 1
    }

    /// Playback speed in percent of the source speed, 100 without a timewarp.
    pub fn speed(&self) -> f64 {
        match &self.timewarp {
            Some(tw) => tw.speed_in_percent(self),
            None => 100.0,
        }
    }

    pub fn is_reverse(&self) -> bool {
        self.timewarp.as_ref().map_or(false, Timewarp::is_reverse)
    }

    pub fn is_black(&self) -> bool {
        self.reel == "BL"
    }

    pub fn is_generator(&self) -> bool {
        GENERATOR_REELS.contains(&self.reel.as_str())
    }

    /// True if the event is entered through a transition rather than a cut.
    pub fn has_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// True if the next event's transition eats into this one.
    pub fn ends_with_transition(&self) -> bool {
        self.outgoing_transition_duration > 0
    }

    pub fn has_timewarp(&self) -> bool {
        self.timewarp.is_some()
    }

    pub fn incoming_transition_duration(&self) -> u32 {
        self.transition.as_ref().map_or(0, |t| t.duration)
    }
}

impl fmt::Display for Event {
    /// Human-readable summary. This is not a valid EDL line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  {}  {}  {}  {}  {}",
            self.num,
            self.reel,
            self.track,
            self.src_start_tc,
            self.src_end_tc,
            self.rec_start_tc,
            self.rec_end_tc
        )
    }
}
