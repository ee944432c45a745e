//! EDL Library
//!
//! Parses CMX-style Edit Decision Lists and derives clip and capture lists
//! from them.

pub mod cli;
pub mod config;
pub mod edl;
pub mod media;
pub mod timecode;

pub use config::Config;
pub use edl::{EdlError, Event, List, Parser};
pub use timecode::{Timecode, TimecodeError, DEFAULT_FPS};
