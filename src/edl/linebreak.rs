//! Line terminator detection and normalization.
//!
//! EDLs travel between systems a lot and regularly arrive with classic Mac
//! `\r` terminators, or with a mix of `\r`, `\r\n` and `\n` after being
//! edited by hand. Everything is folded to `\n` before the document is split
//! into lines, so every terminator counts as exactly one line break.

use std::borrow::Cow;

/// How much of the document is inspected to decide the terminator.
const SNIFF_WINDOW: usize = 4096;

/// A line terminator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineEnding {
    /// Detect the terminator used by the first line break of the document.
    ///
    /// Only the leading part of the input is inspected. Returns `None` when
    /// that part contains no line break at all.
    pub fn sniff(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
        let pos = window.iter().position(|&b| b == b'\r' || b == b'\n')?;

        Some(match (window[pos], bytes.get(pos + 1)) {
            (b'\n', _) => LineEnding::Lf,
            (b'\r', Some(b'\n')) => LineEnding::CrLf,
            _ => LineEnding::Cr,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\\n",
            LineEnding::CrLf => "\\r\\n",
            LineEnding::Cr => "\\r",
        }
    }
}

/// Fold every `\r\n` and lone `\r` into `\n`.
///
/// Borrows the input untouched when it already uses `\n` only.
pub fn normalize_line_breaks(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
}
