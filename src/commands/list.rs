//! List command handler

use anyhow::{Context, Result};

use edl::cli::{InputArgs, TransformArgs};
use edl::{Config, Event, List};

use super::{edit_code, load_list};

/// Print the events of an EDL after the requested transforms.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, transforms: &TransformArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let list = apply_transforms(load_list(input, &config)?, transforms);

    if json {
        let out = serde_json::to_string_pretty(&list).context("Failed to serialize events")?;
        println!("{}", out);
    } else {
        print!("{}", format_table(&list));
    }
    Ok(())
}

/// Apply the selected transforms in their fixed order.
pub fn apply_transforms(mut list: List, transforms: &TransformArgs) -> List {
    if transforms.without_transitions {
        list = list.without_transitions();
    }
    if transforms.without_generators {
        list = list.without_generators();
    }
    if transforms.without_timewarps {
        list = list.without_timewarps();
    }
    if transforms.spliced {
        list = list.spliced();
    }
    if transforms.renumber {
        list = list.renumbered();
    }
    if transforms.from_zero {
        list = list.from_zero();
    }
    list
}

pub fn format_table(list: &List) -> String {
    if list.is_empty() {
        return "No events.\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<8} {:<5} {:<5} {:>4}  {:<11} {:<11} {:<11} {}\n",
        "NUM", "REEL", "TRACK", "EDIT", "DUR", "SRC IN", "SRC OUT", "REC IN", "REC OUT"
    );
    for event in list {
        out.push_str(&format_row(event));
        out.push('\n');
    }
    out
}

fn format_row(event: &Event) -> String {
    let duration = match event.incoming_transition_duration() {
        0 if !event.has_transition() => String::new(),
        d => format!("{:03}", d),
    };
    let mut row = format!(
        "{:<6} {:<8} {:<5} {:<5} {:>4}  {} {} {} {}",
        event.num,
        event.reel,
        event.track,
        edit_code(event),
        duration,
        event.src_start_tc,
        event.src_end_tc,
        event.rec_start_tc,
        event.rec_end_tc
    );

    let mut notes = Vec::new();
    if event.has_timewarp() {
        notes.push(format!("speed {:.1}%", event.speed()));
    }
    if let Some(name) = &event.clip_name {
        notes.push(name.clone());
    }
    if !notes.is_empty() {
        row.push_str("  ");
        row.push_str(&notes.join(", "));
    }
    row
}
