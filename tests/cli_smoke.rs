use std::path::PathBuf;

use playhead::{Fps, Node, Point, Timeline};

fn write_fixture_with_duration(dir: &PathBuf, duration_ms: f64) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let timeline = Timeline {
        fps: Fps::new(60, 1).unwrap(),
        nodes: vec![Node {
            id: "n0".to_string(),
            position: Point::new(0.0, 0.0),
            start_ms: 0.0,
            duration_ms,
            color: "red".to_string(),
        }],
    };
    let path = dir.join("timeline.json");
    let f = std::fs::File::create(&path).unwrap();
    serde_json::to_writer_pretty(f, &timeline).unwrap();
    path
}

fn write_fixture(dir: &PathBuf) -> PathBuf {
    write_fixture_with_duration(dir, 1000.0)
}

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_playhead")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "playhead.exe"
            } else {
                "playhead"
            });
            p
        })
}

#[test]
fn cli_eval_prints_visuals() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let timeline_path = write_fixture(&dir);
    let in_arg = timeline_path.to_string_lossy().to_string();

    let out = std::process::Command::new(bin_path())
        .args(["eval", "--in", in_arg.as_str(), "--frame", "15"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let graph: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(graph["frame"], 15);
    assert_eq!(graph["nodes"][0]["id"], "n0");
}

#[test]
fn cli_play_runs_a_bounded_timeline_to_the_end() {
    let dir = PathBuf::from("target").join("cli_smoke_play");
    // 30ms at 60fps is a 2-frame timeline: real-time playback ends quickly.
    let timeline_path = write_fixture_with_duration(&dir, 30.0);
    let in_arg = timeline_path.to_string_lossy().to_string();

    let out = std::process::Command::new(bin_path())
        .args(["play", "--in", in_arg.as_str(), "--from", "1"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("frame    2"));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("playback finished: Ended at frame 2"));
}

#[test]
fn cli_info_reports_duration() {
    let dir = PathBuf::from("target").join("cli_smoke_info");
    let timeline_path = write_fixture(&dir);
    let in_arg = timeline_path.to_string_lossy().to_string();

    let out = std::process::Command::new(bin_path())
        .args(["info", "--in", in_arg.as_str()])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("60 frames"));
}
