//! Unit tests for parsing fixture EDLs

use std::fs::File;

use edl::edl::{EdlError, TransitionKind};
use edl::{Parser, Timecode, TimecodeError};

use crate::helpers::{fixture_list, fixture_path, load_fixture, parse_fixture};

fn tc(text: &str) -> Timecode {
    Timecode::parse(text, 25).unwrap()
}

#[test]
fn dissolve_fixture_builds_three_events() {
    let output = parse_fixture("dissolve.edl");
    let list = &output.list;
    assert_eq!(list.len(), 3);

    assert!(list[0].is_black());
    assert_eq!(list[0].outgoing_transition_duration, 25);
    assert_eq!(list[0].rec_length(), 0);
    assert_eq!(list[0].rec_length_with_transition(), 25);

    let dissolve = list[1].transition.as_ref().unwrap();
    assert_eq!(dissolve.kind, TransitionKind::Dissolve);
    assert_eq!(dissolve.duration, 25);
    assert_eq!(dissolve.effect.as_deref(), Some("CROSS DISSOLVE"));
    assert_eq!(list[1].clip_name.as_deref(), Some("TAPE_3.MOV"));
    assert_eq!(
        list[1].comments,
        vec!["* EFFECT NAME: CROSS DISSOLVE", "* FROM CLIP NAME:  TAPE_3.MOV"]
    );

    assert_eq!(list[2].num, "002");
    assert!(!list[2].has_transition());
}

#[test]
fn header_lines_are_reported_with_line_numbers() {
    let output = parse_fixture("dissolve.edl");
    let lines: Vec<usize> = output.diagnostics.iter().map(|d| d.line_number).collect();
    assert_eq!(lines, vec![1, 2]);
    assert!(matches!(output.diagnostics[0].error, EdlError::OrphanComment));
    assert_eq!(
        output.diagnostics[0].to_string(),
        "Cannot parse TITLE: TEST DISSOLVE (line 1) - Line does not belong to any event"
    );
}

#[test]
fn events_remember_their_line() {
    let list = fixture_list("dissolve.edl");
    let lines: Vec<Option<usize>> = list.iter().map(|e| e.line_number).collect();
    assert_eq!(lines, vec![Some(4), Some(5), Some(8)]);
}

#[test]
fn timewarp_fixture_slow_motion_and_reverse() {
    let list = fixture_list("timewarp.edl");
    assert_eq!(list.len(), 2);

    let slomo = &list[0];
    assert_eq!(slomo.speed(), 50.0);
    assert_eq!(slomo.src_length(), 5);
    assert_eq!(slomo.capture_to_tc(), tc("03:03:19:24"));
    assert_eq!(slomo.clip_name.as_deref(), Some("SLOMO.MOV"));

    let reverse = &list[1];
    assert!(reverse.is_reverse());
    assert_eq!(reverse.speed(), -100.0);
    assert_eq!(reverse.rec_length(), 1000);
    assert_eq!(reverse.capture_from_tc(), tc("01:00:00:00"));
    assert_eq!(reverse.capture_to_tc(), tc("01:00:40:00"));
}

#[test]
fn wipe_and_key_fixture() {
    let output = parse_fixture("wipe_key.edl");
    let list = &output.list;
    assert_eq!(list.len(), 3);
    assert_eq!(output.diagnostics.len(), 1);

    let wipe = list[1].transition.as_ref().unwrap();
    assert_eq!(wipe.smpte_wipe_index(), Some("001"));
    assert_eq!(wipe.duration, 10);
    assert_eq!(wipe.effect.as_deref(), Some("EDGE WIPE"));
    assert_eq!(list[0].outgoing_transition_duration, 10);

    let key = list[2].transition.as_ref().unwrap();
    assert_eq!(key.kind, TransitionKind::Key);
    assert_eq!(key.duration, 0);
    assert!(list[2].is_generator());
}

#[test]
fn unknown_transition_code_aborts() {
    let text = load_fixture("unknown_transition.edl");
    match Parser::default().parse_str(&text) {
        Err(EdlError::UnrecognizedTransitionCode { code }) => assert_eq!(code, "X"),
        other => panic!("expected UnrecognizedTransitionCode, got {:?}", other),
    }
}

#[test]
fn classic_mac_line_endings() {
    let output = parse_fixture("mac_line_endings.edl");
    assert_eq!(output.list.len(), 2);
    assert_eq!(output.list[0].comments, vec!["NOTE ONE"]);
    // The TITLE line still counts as line one, the CRLF counts once
    assert_eq!(output.list[1].line_number, Some(4));
}

#[test]
fn frame_rate_decides_which_timecodes_are_valid() {
    let at_25 = Parser::new(25)
        .parse_file(fixture_path("twelve_fps.edl"))
        .unwrap();
    assert_eq!(at_25.list.len(), 3);

    let at_12 = Parser::new(12)
        .parse_file(fixture_path("twelve_fps.edl"))
        .unwrap();
    assert_eq!(at_12.list.len(), 2);
    let frame_errors: Vec<_> = at_12
        .diagnostics
        .iter()
        .filter_map(|d| match &d.error {
            EdlError::Timecode(e) => Some((d.line_number, e.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        frame_errors,
        vec![(3, TimecodeError::FrameOutOfRange { value: 13, max: 12 })]
    );
    assert!(at_12.diagnostics[1]
        .to_string()
        .ends_with("There can be no more than 12 frames @12, got 13"));
}

#[test]
fn parse_reader_matches_parse_file() {
    let from_reader = Parser::default()
        .parse_reader(File::open(fixture_path("spliceme.edl")).unwrap())
        .unwrap();
    assert_eq!(from_reader.list, fixture_list("spliceme.edl"));
}

#[test]
fn missing_file_is_io_error() {
    let result = Parser::default().parse_file(fixture_path("does_not_exist.edl"));
    assert!(matches!(result, Err(EdlError::Io(_))));
}

#[test]
fn oversized_timewarp_rate_is_skipped() {
    let text = "\
001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
M2   008C       99999999999999999999.0                08:04:24:24
";
    let output = Parser::default().parse_str(text).unwrap();
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].line_number, 2);
    assert!(matches!(
        output.diagnostics[0].error,
        EdlError::InvalidTimewarpRate { .. }
    ));

    let captured = output.list.capture_list();
    assert!(captured[0].timewarp.is_none());
    assert_eq!(captured[0].capture_to_tc(), tc("08:04:25:19"));
}
