//! CMX 3600 style Edit Decision Lists.
//!
//! An EDL is a line-oriented text document describing an edit: which
//! source ranges of which reels land where on the record timeline, how
//! events are joined (cuts, dissolves, wipes, keys) and which of them are
//! retimed (`M2` lines).
//!
//! This module provides:
//! - [`Parser`] - reads documents into an ordered [`List`] of [`Event`]s
//! - [`List`] - pure transforms deriving clip and capture lists
//! - [`Matcher`] - the closed set of line shapes the parser recognizes
//!
//! # Example
//!
//! ```
//! use edl::Parser;
//!
//! let text = "\
//! 001  BL       V     C        00:00:00:00 00:00:00:00 01:00:00:00 01:00:00:00
//! 001  003      V     D    025 00:00:10:00 00:00:15:00 01:00:00:00 01:00:05:00
//! ";
//! let list = Parser::default().parse_str(text)?.list;
//! assert_eq!(list.len(), 2);
//! assert!(list[0].ends_with_transition());
//! assert_eq!(list[1].incoming_transition_duration(), 25);
//! # Ok::<(), edl::EdlError>(())
//! ```

mod error;
mod event;
mod linebreak;
mod list;
mod matcher;
mod parser;
mod timewarp;

pub use error::EdlError;
pub use event::{Event, Transition, TransitionKind};
pub use linebreak::{normalize_line_breaks, LineEnding};
pub use list::List;
pub use matcher::{LineContext, Matcher};
pub use parser::{Diagnostic, ParseOutput, Parser};
pub use timewarp::Timewarp;
