//! Unit tests for the ffmpeg cutter and grabber in dry-run mode

use edl::media::{cut, grab, FfmpegCutter, FfmpegGrabber};

use crate::helpers::fixture_list;

#[test]
fn cutter_plans_one_command_per_event() {
    let list = fixture_list("spliceme.edl");
    let mut cutter = FfmpegCutter::new("/renders/offline.mov")
        .unwrap()
        .dry_run(true);
    assert_eq!(cut(&list, &mut cutter).unwrap(), 3);

    let rendered: Vec<String> = cutter.commands().iter().map(|c| c.render()).collect();
    assert_eq!(
        rendered,
        vec![
            "ffmpeg -i /renders/offline.mov -ss 00:00:00.000 -vframes 25 -vcodec mjpeg \
             -acodec copy -y /renders/001_offline.mov",
            "ffmpeg -i /renders/offline.mov -ss 00:00:01.000 -vframes 17 -vcodec mjpeg \
             -acodec copy -y /renders/002_offline.mov",
            "ffmpeg -i /renders/offline.mov -ss 00:00:01.680 -vframes 30 -vcodec mjpeg \
             -acodec copy -y /renders/003_offline.mov",
        ]
    );
}

#[test]
fn grabber_plans_offset_frames() {
    let list = fixture_list("dissolve.edl");
    let mut grabber = FfmpegGrabber::new("/renders/offline.mov")
        .unwrap()
        .with_ffmpeg_bin("/usr/local/bin/ffmpeg")
        .dry_run(true);
    assert_eq!(grab(&list, &mut grabber, 5).unwrap(), 3);

    let commands = grabber.commands();
    assert_eq!(commands[0].program(), "/usr/local/bin/ffmpeg");
    assert_eq!(
        commands[2].render(),
        "/usr/local/bin/ffmpeg -i /renders/offline.mov -an -ss 00:00:05.200 -vframes 1 \
         -y /renders/002_offline%d.jpg"
    );
}

#[test]
fn missing_ffmpeg_is_reported() {
    let list = fixture_list("spliceme.edl");
    let mut cutter = FfmpegCutter::new("offline.mov")
        .unwrap()
        .with_ffmpeg_bin("edl-definitely-missing-ffmpeg");
    let err = cut(&list, &mut cutter).unwrap_err();
    assert!(err.to_string().starts_with("edl-definitely-missing-ffmpeg not found"));
    assert!(cutter.commands().is_empty());
}
