//! Media tools driven by an edit list.
//!
//! Both tools work on a single rendered movie of the whole edit whose
//! first frame is the first frame of the first event. The list is re-based
//! with [`List::from_zero`] so record timecodes become offsets into that
//! movie.
//!
//! # Example
//!
//! ```
//! use edl::media::{cut, FfmpegCutter};
//! use edl::Parser;
//!
//! let text = "\
//! 001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
//! ";
//! let list = Parser::default().parse_str(text)?.list;
//! let mut cutter = FfmpegCutter::new("offline.mov")?.dry_run(true);
//! assert_eq!(cut(&list, &mut cutter)?, 1);
//! assert!(cutter.commands()[0].render().contains("-vframes 20"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cutter;
mod error;
pub mod ffmpeg;
pub mod grabber;

pub use cutter::FfmpegCutter;
pub use error::MediaError;
pub use ffmpeg::FfmpegCommand;
pub use grabber::FfmpegGrabber;

use crate::edl::{Event, List};
use crate::timecode::Timecode;

/// Something that can extract `[start, end)` of the edit for an event.
pub trait SegmentCutter {
    fn cut_segment(&mut self, event: &Event, start: Timecode, end: Timecode)
        -> Result<(), MediaError>;
}

/// Something that can extract a single frame of the edit for an event.
pub trait FrameGrabber {
    fn grab_frame(&mut self, event: &Event, at: Timecode) -> Result<(), MediaError>;
}

/// Cut every event of the list. Returns the number of segments cut.
///
/// Stops at the first failing segment.
pub fn cut<C: SegmentCutter + ?Sized>(list: &List, cutter: &mut C) -> Result<usize, MediaError> {
    let rebased = list.from_zero();
    for event in &rebased {
        let start = event.rec_start_tc;
        cutter.cut_segment(event, start, start + event.rec_length())?;
    }
    Ok(rebased.len())
}

/// Grab the frame `offset` frames into every event. Returns the number of
/// frames grabbed.
pub fn grab<G: FrameGrabber + ?Sized>(
    list: &List,
    grabber: &mut G,
    offset: i64,
) -> Result<usize, MediaError> {
    let rebased = list.from_zero();
    for event in &rebased {
        grabber.grab_frame(event, event.rec_start_tc + offset)?;
    }
    Ok(rebased.len())
}
