//! Line classifiers.
//!
//! Every line of an EDL is offered to the [`Matcher`]s in
//! [`Matcher::PRIORITY`] order and handled by the first one that matches.
//! The order is load-bearing: clip and effect names are comments too, so
//! they have to be tried before the generic comment matcher, and the
//! fallback swallows anything that is not blank.
//!
//! Matchers work on the stack of events parsed so far. Most of them only
//! touch the event on top of the stack; the timewarp matcher searches
//! backwards because `M2` lines can trail the event they retime.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::error::EdlError;
use super::event::{Event, Transition};
use super::timewarp::Timewarp;
use crate::timecode::Timecode;

// 021  009      V     C        00:39:04:21 00:39:05:09 01:00:26:17 01:00:27:05
// 025  GEN      V     D    025 00:00:55:10 00:00:58:11 01:00:29:19 01:00:32:20
static EVENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let tc = r"(\d{1,2}:\d{1,2}:\d{1,2}:\d{1,2})";
    Regex::new(&format!(
        r"^(\d+\w*)\s+(\S+)\s+(\S+)\s+(\w+)\s+(?:(\d+)\s+)?{tc}\s+{tc}\s+{tc}\s+{tc}"
    ))
    .expect("event pattern is valid")
});

static EFFECT_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\s*EFFECT NAME:\s*(.+)$").expect("effect pattern is valid"));

static CLIP_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\s*FROM CLIP NAME:\s*(.+)$").expect("clip name pattern is valid")
});

// M2   008C       050.0                08:04:24:24
static TIMEWARP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M2\s+(\S+)\s+(-?\d+(?:\.\d+)?)\s+(\d{1,2}:\d{1,2}:\d{1,2}:\d{1,2})")
        .expect("timewarp pattern is valid")
});

const COMMENT_MARKER: &str = "* ";

/// Largest source rate an `M2` line may declare, in frames per second.
pub const MAX_TIMEWARP_FPS: f64 = 1000.0;

/// Per-line information a matcher needs besides the line itself.
#[derive(Debug, Clone, Copy)]
pub struct LineContext {
    /// Frame rate for every timecode on the line
    pub fps: u32,
    /// 1-based position of the line in the document
    pub line_number: usize,
}

/// One recognized line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `NUM REEL TRACK CODE [DURATION] SRC_IN SRC_OUT REC_IN REC_OUT`
    Event,
    /// `* EFFECT NAME: <text>`
    EffectName,
    /// `* FROM CLIP NAME: <text>`
    ClipName,
    /// `M2 <reel> <fps> <timecode>`
    Timewarp,
    /// Any other `* ` line
    Comment,
    /// Any other non-blank line, e.g. vendor banners
    Fallback,
}

impl Matcher {
    /// Matchers in the order they are tried.
    pub const PRIORITY: [Matcher; 6] = [
        Matcher::Event,
        Matcher::EffectName,
        Matcher::ClipName,
        Matcher::Timewarp,
        Matcher::Comment,
        Matcher::Fallback,
    ];

    /// The first matcher that accepts `line`, if any.
    pub fn classify(line: &str) -> Option<Matcher> {
        Self::PRIORITY.into_iter().find(|m| m.matches(line))
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::Event => EVENT_PATTERN.is_match(line),
            Matcher::EffectName => EFFECT_NAME_PATTERN.is_match(line),
            Matcher::ClipName => CLIP_NAME_PATTERN.is_match(line),
            Matcher::Timewarp => TIMEWARP_PATTERN.is_match(line),
            Matcher::Comment => line.starts_with(COMMENT_MARKER),
            Matcher::Fallback => !line.trim().is_empty(),
        }
    }

    /// Apply `line` to the event stack.
    ///
    /// # Errors
    ///
    /// Every failure except [`EdlError::UnrecognizedTransitionCode`] only
    /// concerns this line and leaves the stack untouched.
    pub fn apply(
        &self,
        stack: &mut Vec<Event>,
        line: &str,
        ctx: LineContext,
    ) -> Result<(), EdlError> {
        match self {
            Matcher::Event => apply_event(stack, line, ctx),
            Matcher::EffectName => {
                let effect = captured_text(&EFFECT_NAME_PATTERN, line);
                let event = current_event(stack)?;
                match event.transition.as_mut() {
                    Some(transition) => transition.effect = effect,
                    None => debug!(line = ctx.line_number, "Effect name on a cut, keeping comment only"),
                }
                event.comments.push(line.to_string());
                Ok(())
            }
            Matcher::ClipName => {
                let name = captured_text(&CLIP_NAME_PATTERN, line);
                let event = current_event(stack)?;
                event.clip_name = name;
                event.comments.push(line.to_string());
                Ok(())
            }
            Matcher::Timewarp => apply_timewarp(stack, line, ctx),
            Matcher::Comment => {
                let text = line.strip_prefix(COMMENT_MARKER).unwrap_or(line);
                current_event(stack)?.comments.push(text.to_string());
                Ok(())
            }
            Matcher::Fallback => {
                current_event(stack)?.comments.push(line.to_string());
                Ok(())
            }
        }
    }
}

fn current_event(stack: &mut [Event]) -> Result<&mut Event, EdlError> {
    stack.last_mut().ok_or(EdlError::OrphanComment)
}

fn captured_text(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn apply_event(stack: &mut Vec<Event>, line: &str, ctx: LineContext) -> Result<(), EdlError> {
    let Some(caps) = EVENT_PATTERN.captures(line) else {
        return Ok(());
    };

    let transition = transition_from_code(&caps[4], caps.get(5).map(|m| m.as_str()))?;

    let timecode = |i: usize| Timecode::parse(&caps[i], ctx.fps);
    let mut event = Event::new(
        &caps[1],
        &caps[2],
        &caps[3],
        timecode(6)?,
        timecode(7)?,
        timecode(8)?,
        timecode(9)?,
    );
    event.line_number = Some(ctx.line_number);

    if let Some(transition) = &transition {
        // The event being transitioned from gives up these frames.
        if let Some(previous) = stack.last_mut() {
            previous.outgoing_transition_duration = transition.duration;
        }
    }
    event.transition = transition;

    stack.push(event);
    Ok(())
}

/// Decode the edit column (`C`, `D`, `W<n>`, `K`) and its duration.
fn transition_from_code(code: &str, duration: Option<&str>) -> Result<Option<Transition>, EdlError> {
    let frames = || -> Result<u32, EdlError> {
        let duration = duration.ok_or_else(|| EdlError::MissingTransitionDuration {
            code: code.to_string(),
        })?;
        duration
            .parse()
            .map_err(|_| EdlError::InvalidTransitionDuration {
                code: code.to_string(),
                duration: duration.to_string(),
            })
    };

    match code {
        "C" => Ok(None),
        "D" => Ok(Some(Transition::dissolve(frames()?))),
        "K" => Ok(Some(Transition::key(frames()?))),
        _ => match code.strip_prefix('W') {
            Some(index) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Some(Transition::wipe(frames()?, index)))
            }
            _ => Err(EdlError::UnrecognizedTransitionCode {
                code: code.to_string(),
            }),
        },
    }
}

fn apply_timewarp(stack: &mut [Event], line: &str, ctx: LineContext) -> Result<(), EdlError> {
    let Some(caps) = TIMEWARP_PATTERN.captures(line) else {
        return Ok(());
    };

    let reel = &caps[1];
    let rate = caps[2]
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && r.abs() <= MAX_TIMEWARP_FPS)
        .ok_or_else(|| EdlError::InvalidTimewarpRate {
            rate: caps[2].to_string(),
        })?;
    let start = Timecode::parse(&caps[3], ctx.fps)?;

    let event = stack
        .iter_mut()
        .rev()
        .find(|e| e.reel == reel && e.src_start_tc == start)
        .ok_or_else(|| EdlError::UnresolvedTimewarpReference {
            reel: reel.to_string(),
            timecode: start,
        })?;

    event.timewarp = Some(Timewarp::new(rate));
    Ok(())
}
