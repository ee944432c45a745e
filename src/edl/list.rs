//! Ordered event lists and the transforms that derive clip lists from them.
//!
//! Transforms are pure: each one borrows a [`List`] and returns a new one,
//! so they chain the way an editor reads them:
//!
//! ```
//! use edl::Parser;
//!
//! let text = "\
//! 001  BL       V     C        00:00:00:00 00:00:01:00 01:00:00:00 01:00:01:00
//! 002  008C     V     C        08:04:24:24 08:04:25:19 01:00:01:00 01:00:01:20
//! ";
//! let list = Parser::default().parse_str(text)?.list;
//! let clips = list.without_transitions().without_generators().renumbered();
//! assert_eq!(clips.len(), 1);
//! assert_eq!(clips[0].num, "001");
//! # Ok::<(), edl::EdlError>(())
//! ```

use std::ops::Index;
use std::slice;

use serde::Serialize;
use tracing::debug;

use super::event::Event;
use crate::timecode::Timecode;

/// Suffix given to the second half of an unrolled transition.
const TRANSITION_SUFFIX: &str = "A";

/// Narrowest event number produced by [`List::renumbered`].
const MIN_NUMBER_WIDTH: usize = 3;

/// An ordered sequence of events, in edit order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct List {
    events: Vec<Event>,
}

impl List {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Drop black, auxiliary and generated events.
    pub fn without_generators(&self) -> List {
        self.iter().filter(|e| !e.is_generator()).cloned().collect()
    }

    /// Replace retimed source ranges with the range the retime really uses.
    ///
    /// Source timecodes become [`Event::capture_from_tc`] and
    /// [`Event::capture_to_tc`] and the timewarp is dropped. Record
    /// timecodes are kept, so the record side no longer matches the source
    /// length of those events.
    pub fn without_timewarps(&self) -> List {
        self.iter()
            .map(|e| match &e.timewarp {
                Some(tw) => {
                    let mut plain = e.copy_properties();
                    plain.src_start_tc = tw.source_used_from(e);
                    plain.src_end_tc = tw.source_used_upto(e);
                    plain
                }
                None => e.clone(),
            })
            .collect()
    }

    /// Join neighbouring events that continue the same piece of source.
    ///
    /// An event is folded into the one before it when both come from the
    /// same reel and its source starts exactly one frame after the source
    /// end of the (already joined) previous event.
    pub fn spliced(&self) -> List {
        let mut spliced: Vec<Event> = Vec::with_capacity(self.len());
        for current in self.iter() {
            match spliced.last_mut() {
                Some(latest)
                    if latest.reel == current.reel
                        && current.src_start_tc == latest.src_end_tc + 1 =>
                {
                    latest.src_end_tc = current.src_end_tc;
                    latest.rec_end_tc = current.rec_end_tc;
                }
                _ => spliced.push(current.clone()),
            }
        }
        debug!(before = self.len(), after = spliced.len(), "Spliced events");
        List::new(spliced)
    }

    /// Unroll dissolves, wipes and keys into plain cuts.
    ///
    /// The event a transition leaves is extended by the transition length,
    /// and the event the transition enters becomes a cut numbered with an
    /// `A` suffix. The overlap between the two is not reconciled.
    ///
    /// The pairing is driven by the entered event carrying a transition, so
    /// zero-length keys and dissolves are unrolled as well.
    pub fn without_transitions(&self) -> List {
        let mut unrolled = Vec::with_capacity(self.len());
        for (i, event) in self.iter().enumerate() {
            let next = self.get(i + 1);
            match next.and_then(|n| n.transition.as_ref().map(|t| (n, t))) {
                Some((incoming, transition)) => {
                    let len = i64::from(transition.duration);

                    let mut outgoing = event.copy_properties();
                    outgoing.src_end_tc = outgoing.src_end_tc + len;
                    outgoing.rec_end_tc = outgoing.rec_end_tc + len;

                    let mut second_half = incoming.copy_properties();
                    second_half.num.push_str(TRANSITION_SUFFIX);

                    unrolled.push(outgoing);
                    unrolled.push(second_half);
                }
                // Already emitted together with the event before it.
                _ if event.has_transition() => {}
                _ => unrolled.push(event.clone()),
            }
        }
        List::new(unrolled)
    }

    /// Number events `001`, `002`, ... in list order.
    ///
    /// Numbers are zero-padded to at least three digits, or to the width of
    /// the list length when that is wider.
    pub fn renumbered(&self) -> List {
        let width = self.len().to_string().len().max(MIN_NUMBER_WIDTH);
        self.iter()
            .enumerate()
            .map(|(i, e)| {
                let mut renumbered = e.clone();
                renumbered.num = format!("{:0width$}", i + 1, width = width);
                renumbered
            })
            .collect()
    }

    /// Shift record timecodes so the first event starts at zero.
    pub fn from_zero(&self) -> List {
        let Some(first) = self.events.first() else {
            return List::default();
        };
        let shift_by = first.rec_start_tc;
        self.iter()
            .map(|e| {
                let mut shifted = e.clone();
                shifted.rec_start_tc =
                    Timecode::from_frames(e.rec_start_tc - shift_by, e.rec_start_tc.fps());
                shifted.rec_end_tc =
                    Timecode::from_frames(e.rec_end_tc - shift_by, e.rec_end_tc.fps());
                shifted
            })
            .collect()
    }

    /// The source ranges that have to be fetched to rebuild this edit.
    ///
    /// Generators are dropped, retimes expanded to their real source range,
    /// contiguous pieces joined and the record side re-based to zero.
    pub fn capture_list(&self) -> List {
        self.without_generators()
            .without_timewarps()
            .spliced()
            .from_zero()
    }
}

impl Index<usize> for List {
    type Output = Event;

    fn index(&self, index: usize) -> &Event {
        &self.events[index]
    }
}

impl FromIterator<Event> for List {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        List::new(iter.into_iter().collect())
    }
}

impl IntoIterator for List {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
