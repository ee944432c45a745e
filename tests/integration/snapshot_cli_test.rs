//! CLI output snapshot tests
//!
//! Tests the actual CLI binary output for reproducibility.

use tempfile::TempDir;

use crate::helpers::{edl, fixture_arg, run_edl};

#[test]
fn snapshot_list_dissolve() {
    let (stdout, _stderr, exit_code) = run_edl(&["list", fixture_arg("dissolve.edl").as_str()]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    NUM    REEL     TRACK EDIT   DUR  SRC IN      SRC OUT     REC IN      REC OUT
    001    BL       V     C           00:00:00:00 00:00:00:00 01:00:00:00 01:00:00:00
    001    003      V     D      025  00:00:10:00 00:00:15:00 01:00:00:00 01:00:05:00  TAPE_3.MOV
    002    003      V     C           00:00:15:01 00:00:16:00 01:00:05:00 01:00:05:24
    ");
}

#[test]
fn snapshot_list_timewarp() {
    let (stdout, _stderr, exit_code) = run_edl(&["list", fixture_arg("timewarp.edl").as_str()]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    NUM    REEL     TRACK EDIT   DUR  SRC IN      SRC OUT     REC IN      REC OUT
    001    003      V     C           03:03:19:19 03:03:20:04 01:00:00:00 01:00:00:10  speed 50.0%, SLOMO.MOV
    002    008C     V     C           01:00:39:23 01:01:19:23 01:00:00:10 01:00:40:10  speed -100.0%, REVERSE.MOV
    ");
}

#[test]
fn snapshot_cut_dry_run() {
    let (stdout, _stderr, exit_code) = run_edl(&[
        "cut",
        fixture_arg("spliceme.edl").as_str(),
        "--source",
        "offline.mov",
        "--dry-run",
    ]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    ffmpeg -i offline.mov -ss 00:00:00.000 -vframes 25 -vcodec mjpeg -acodec copy -y 001_offline.mov
    ffmpeg -i offline.mov -ss 00:00:01.000 -vframes 17 -vcodec mjpeg -acodec copy -y 002_offline.mov
    ffmpeg -i offline.mov -ss 00:00:01.680 -vframes 30 -vcodec mjpeg -acodec copy -y 003_offline.mov
    ");
}

#[test]
fn snapshot_config_path() {
    let home = TempDir::new().unwrap();
    let output = edl(&home).args(["config", "path"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    let home_filter = regex::escape(&home.path().to_string_lossy());
    insta::with_settings!({filters => vec![(home_filter.as_str(), "[HOME]")]}, {
        insta::assert_snapshot!(stdout, @"[HOME]/.config/edl/config.toml");
    });
}
