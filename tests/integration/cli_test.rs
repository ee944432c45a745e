//! CLI behavior tests for list, capture, cut and grab

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{edl, fixture_arg, run_edl};

#[test]
fn list_prints_events_and_warns_about_header() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["list", fixture_arg("dissolve.edl").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("TAPE_3.MOV"))
        .stdout(predicate::str::contains("00:00:15:01 00:00:16:00"))
        .stderr(predicate::str::contains(
            "Cannot parse TITLE: TEST DISSOLVE (line 1) - Line does not belong to any event",
        ))
        .stderr(predicate::str::contains("Cannot parse FCM: NON-DROP FRAME (line 2)"));
}

#[test]
fn list_json_is_an_event_array() {
    let (stdout, _stderr, exit_code) = run_edl(&["list", fixture_arg("dissolve.edl").as_str(), "--json"]);
    assert_eq!(exit_code, 0);

    let events: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["reel"], "BL");
    assert_eq!(events[0]["outgoing_transition_duration"], 25);
    assert_eq!(events[1]["transition"]["type"], "dissolve");
    assert_eq!(events[1]["transition"]["duration"], 25);
    assert_eq!(events[1]["clip_name"], "TAPE_3.MOV");
}

#[test]
fn list_transforms_combine() {
    let (stdout, _stderr, exit_code) = run_edl(&[
        "list",
        fixture_arg("dissolve.edl").as_str(),
        "--json",
        "--without-transitions",
        "--without-generators",
        "--spliced",
        "--renumber",
        "--from-zero",
    ]);
    assert_eq!(exit_code, 0);

    let events: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["num"], "001");
    assert_eq!(events[0]["src_start_tc"], "00:00:10:00");
    assert_eq!(events[0]["src_end_tc"], "00:00:16:00");
    assert_eq!(events[0]["rec_start_tc"], "00:00:00:00");
}

#[test]
fn unknown_transition_code_fails() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["list", fixture_arg("unknown_transition.edl").as_str()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse EDL"))
        .stderr(predicate::str::contains("Unrecognized transition code 'X'"));
}

#[test]
fn missing_file_fails() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["list", "/definitely/not/here.edl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read EDL"));
}

#[test]
fn fps_flag_changes_frame_validation() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["list", fixture_arg("twelve_fps.edl").as_str(), "--fps", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("001 ").and(predicate::str::contains("003 ")))
        .stdout(predicate::str::contains("002 ").not())
        .stderr(predicate::str::contains(
            "There can be no more than 12 frames @12, got 13",
        ));

    edl(&home)
        .args(["list", fixture_arg("twelve_fps.edl").as_str(), "--fps", "25"])
        .assert()
        .success()
        .stderr(predicate::str::contains("frames @").not());
}

#[test]
fn zero_fps_is_rejected_by_argument_parsing() {
    let (_stdout, stderr, exit_code) =
        run_edl(&["list", fixture_arg("dissolve.edl").as_str(), "--fps", "0"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--fps"));
}

#[test]
fn log_filter_can_silence_warnings() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .env("EDL_LOG", "off")
        .args(["list", fixture_arg("dissolve.edl").as_str()])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_logs_line_ending_detection() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["--verbose", "list", fixture_arg("mac_line_endings.edl").as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Detected line terminator"));
}

#[test]
fn capture_prints_source_ranges() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["capture", fixture_arg("spliceme.edl").as_str()])
        .assert()
        .success()
        .stdout(
            "NUM    REEL     FROM        TO          FRAMES\n\
             002    008C     06:42:50:18 06:42:52:16     48\n",
        );
}

#[test]
fn capture_json_expands_timewarps() {
    let (stdout, _stderr, exit_code) =
        run_edl(&["capture", fixture_arg("timewarp.edl").as_str(), "--json"]);
    assert_eq!(exit_code, 0);

    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows[0]["from"], "03:03:19:19");
    assert_eq!(rows[0]["to"], "03:03:19:24");
    assert_eq!(rows[0]["length"], 5);
    assert_eq!(rows[1]["from"], "01:00:00:00");
    assert_eq!(rows[1]["to"], "01:00:40:00");
    assert_eq!(rows[1]["length"], 1000);
}

#[test]
fn cut_dry_run_prints_commands() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args([
            "cut",
            fixture_arg("spliceme.edl").as_str(),
            "--source",
            "offline.mov",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ffmpeg -i offline.mov -ss 00:00:01.000 -vframes 17 -vcodec mjpeg -acodec copy -y 002_offline.mov",
        ));
}

#[test]
fn grab_dry_run_uses_offset() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args([
            "grab",
            fixture_arg("dissolve.edl").as_str(),
            "--source",
            "offline.mov",
            "--offset",
            "5",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ffmpeg -i offline.mov -an -ss 00:00:05.200 -vframes 1 -y 002_offline%d.jpg",
        ));
}

#[test]
fn cut_without_ffmpeg_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("edl");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[media]\nffmpeg_bin = \"edl-definitely-missing-ffmpeg\"\n",
    )
    .unwrap();

    edl(&home)
        .args(["cut", fixture_arg("spliceme.edl").as_str(), "--source", "offline.mov"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("edl-definitely-missing-ffmpeg not found"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    edl(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_edl"));
}
