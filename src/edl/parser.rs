//! EDL document parser.
//!
//! Drives the [`Matcher`]s over a document, one line at a time, building up
//! the ordered list of events.
//!
//! # Error Handling
//!
//! A line that cannot be applied is reported as a [`Diagnostic`] and
//! skipped, the rest of the document is still parsed. The one exception is
//! an event line with an unrecognized transition code: it aborts the parse
//! and is returned as the `Err` of the parse call.
//!
//! # Example
//!
//! ```
//! use edl::Parser;
//!
//! let text = "\
//! TITLE: DEMO
//! 001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
//! * FROM CLIP NAME:  TAPE_6-10.MOV
//! ";
//! let output = Parser::new(25).parse_str(text)?;
//! assert_eq!(output.list.len(), 1);
//! assert_eq!(output.list[0].clip_name.as_deref(), Some("TAPE_6-10.MOV"));
//! // The title line precedes every event and is reported, not fatal.
//! assert_eq!(output.diagnostics.len(), 1);
//! # Ok::<(), edl::EdlError>(())
//! ```

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use super::error::EdlError;
use super::event::Event;
use super::linebreak::{normalize_line_breaks, LineEnding};
use super::list::List;
use super::matcher::{LineContext, Matcher};
use crate::timecode::DEFAULT_FPS;

/// A line that was skipped because it could not be applied.
#[derive(Debug)]
pub struct Diagnostic {
    /// 1-based line number
    pub line_number: usize,
    /// The offending line, trimmed
    pub line: String,
    pub error: EdlError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot parse {} (line {}) - {}",
            self.line, self.line_number, self.error
        )
    }
}

/// The result of a successful parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub list: List,
    /// Lines that were skipped, in document order
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn into_list(self) -> List {
        self.list
    }
}

/// Parser for EDL documents.
///
/// EDLs carry no frame rate, so the parser is told which one to use for
/// every timecode it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    fps: u32,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl Parser {
    pub fn new(fps: u32) -> Self {
        Self { fps }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Parse an EDL file from a filesystem path.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParseOutput, EdlError> {
        let bytes = fs::read(path.as_ref())?;
        self.parse_str(&String::from_utf8_lossy(&bytes))
    }

    /// Parse an EDL from any reader. The whole input is read up front so
    /// line terminators can be normalized.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<ParseOutput, EdlError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.parse_str(&String::from_utf8_lossy(&bytes))
    }

    /// Parse an EDL held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`EdlError::UnrecognizedTransitionCode`] if an event line uses
    /// an edit code other than `C`, `D`, `W<n>` or `K`. Every other problem
    /// is reported through [`ParseOutput::diagnostics`].
    pub fn parse_str(&self, input: &str) -> Result<ParseOutput, EdlError> {
        if let Some(ending) = LineEnding::sniff(input) {
            debug!(line_ending = ending.as_str(), "Detected line terminator");
        }
        let normalized = normalize_line_breaks(input);

        let mut stack: Vec<Event> = Vec::new();
        let mut diagnostics = Vec::new();

        for (index, raw_line) in normalized.split('\n').enumerate() {
            let line = raw_line.trim();
            let Some(matcher) = Matcher::classify(line) else {
                continue;
            };

            let ctx = LineContext {
                fps: self.fps,
                line_number: index + 1,
            };

            if let Err(error) = matcher.apply(&mut stack, line, ctx) {
                if !error.is_recoverable() {
                    return Err(error);
                }
                let diagnostic = Diagnostic {
                    line_number: ctx.line_number,
                    line: line.to_string(),
                    error,
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }

        debug!(events = stack.len(), skipped = diagnostics.len(), "Parsed EDL");
        Ok(ParseOutput {
            list: List::new(stack),
            diagnostics,
        })
    }
}
