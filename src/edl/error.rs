//! EDL parsing errors.

use crate::timecode::{Timecode, TimecodeError};

/// Errors raised while classifying and applying EDL lines.
///
/// Most variants only spoil the line they were raised for; the parser logs
/// them and moves on. See [`EdlError::is_recoverable`].
#[derive(Debug, thiserror::Error)]
pub enum EdlError {
    #[error("Cannot parse timecode - {0}")]
    Timecode(#[from] TimecodeError),

    #[error("Cannot find event marked by timewarp (reel {reel} at {timecode})")]
    UnresolvedTimewarpReference { reel: String, timecode: Timecode },

    #[error("Line does not belong to any event")]
    OrphanComment,

    #[error("Transition '{code}' has no duration")]
    MissingTransitionDuration { code: String },

    #[error("Transition '{code}' has an invalid duration '{duration}'")]
    InvalidTransitionDuration { code: String, duration: String },

    #[error("Timewarp rate '{rate}' is out of range")]
    InvalidTimewarpRate { rate: String },

    #[error("Unrecognized transition code '{code}'")]
    UnrecognizedTransitionCode { code: String },

    #[error("Failed to read EDL: {0}")]
    Io(#[from] std::io::Error),
}

impl EdlError {
    /// Whether the parser may skip the offending line and keep going.
    ///
    /// An unknown transition code leaves no event type to assign, so it
    /// aborts the whole parse instead of producing a mistyped event.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EdlError::Timecode(_)
            | EdlError::UnresolvedTimewarpReference { .. }
            | EdlError::OrphanComment
            | EdlError::MissingTransitionDuration { .. }
            | EdlError::InvalidTransitionDuration { .. }
            | EdlError::InvalidTimewarpRate { .. } => true,
            EdlError::UnrecognizedTransitionCode { .. } | EdlError::Io(_) => false,
        }
    }
}
