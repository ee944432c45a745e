//! Capture command handler

use anyhow::{Context, Result};
use serde::Serialize;

use edl::cli::InputArgs;
use edl::{Config, Event, List, Timecode};

use super::load_list;

/// One source range to fetch.
#[derive(Debug, PartialEq, Serialize)]
pub struct CaptureRow {
    pub num: String,
    pub reel: String,
    pub from: Timecode,
    /// Exclusive
    pub to: Timecode,
    /// Frames between `from` and `to`
    pub length: i64,
}

impl From<&Event> for CaptureRow {
    fn from(event: &Event) -> Self {
        let from = event.capture_from_tc();
        let to = event.capture_to_tc();
        Self {
            num: event.num.clone(),
            reel: event.reel.clone(),
            from,
            to,
            length: to - from,
        }
    }
}

/// Print the source ranges needed to rebuild the edit.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let rows = capture_rows(&load_list(input, &config)?);

    if json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to serialize capture list")?;
        println!("{}", out);
    } else {
        print!("{}", format_table(&rows));
    }
    Ok(())
}

pub fn capture_rows(list: &List) -> Vec<CaptureRow> {
    list.capture_list().iter().map(CaptureRow::from).collect()
}

pub fn format_table(rows: &[CaptureRow]) -> String {
    if rows.is_empty() {
        return "Nothing to capture.\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<8} {:<11} {:<11} {:>6}\n",
        "NUM", "REEL", "FROM", "TO", "FRAMES"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<6} {:<8} {} {} {:>6}\n",
            row.num, row.reel, row.from, row.to, row.length
        ));
    }
    out
}
