#![deny(clippy::all, clippy::pedantic)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

const ITEMS: &str = r#"[
  {"id": 5, "filename": "e.jpg"},
  {"id": 1, "filename": "a.jpg", "media_url": "https://cdn.example/a.jpg"},
  {"id": 3, "filename": "c.mp4", "media_type": "video", "slot": "story"},
  {"id": 2, "filename": "b.jpg"},
  {"id": 4, "filename": "d.jpg"}
]"#;

fn workspace(items: &str) -> TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("items.json"), items).expect("write items");
    dir
}

fn postcadence(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("postcadence"));
    cmd.current_dir(dir)
        .env_remove("POSTCADENCE_CONFIG_FILE")
        .env_remove("RUST_LOG")
        .arg("--config-file")
        .arg(dir.join("postcadence.toml"));
    cmd
}

fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join("postcadence.toml"), contents).expect("write config");
}

#[test]
fn plan_preview_prints_calendar() {
    let dir = workspace(ITEMS);
    write_config(
        dir.path(),
        "[schedule]\nweekdays = [1, 3, 5]\nmax_per_day = 2\ntimezone = \"Europe/Berlin\"\n",
    );

    let assert = postcadence(dir.path())
        .args(["plan", "items.json", "--start", "2025-12-01", "--format", "preview"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Schedule preview (Europe/Berlin)

    Mon 1 Dec 2025 (2025-12-01)
      20:00:00  feed   a.jpg
      20:00:00  feed   b.jpg

    Wed 3 Dec 2025 (2025-12-03)
      18:30:00  story  c.mp4
      20:00:00  feed   d.jpg

    Fri 5 Dec 2025 (2025-12-05)
      20:00:00  feed   e.jpg

    5 requested, 5 scheduled, 0 overflow, 5 of 6 slots used
    ");
}

#[test]
fn plan_bulk_writes_update_request() {
    let dir = workspace(ITEMS);
    write_config(dir.path(), "[schedule]\nfeed_time = \"09:15\"\n");

    postcadence(dir.path())
        .args([
            "plan",
            "items.json",
            "--view",
            "month",
            "--dates",
            "2025-12-24,2025-12-10",
            "--max-per-day",
            "2",
            "--format",
            "bulk",
            "-o",
            "bulk.json",
        ])
        .assert()
        .success();

    let raw = fs::read_to_string(dir.path().join("bulk.json")).expect("read bulk output");
    let body: Value = serde_json::from_str(&raw).expect("bulk output is json");

    assert_eq!(
        body,
        json!({
            "items": [
                {"id": 1, "scheduled_date": "2025-12-10", "scheduled_time": "09:15:00", "slot": "feed"},
                {"id": 2, "scheduled_date": "2025-12-10", "scheduled_time": "09:15:00", "slot": "feed"},
                {"id": 3, "scheduled_date": "2025-12-24", "scheduled_time": "18:30:00", "slot": "story"},
                {"id": 4, "scheduled_date": "2025-12-24", "scheduled_time": "09:15:00", "slot": "feed"}
            ],
            "timezone": "UTC"
        })
    );
}

#[test]
fn plan_json_reports_overflow_and_capacity() {
    let dir = workspace(ITEMS);
    write_config(dir.path(), "[schedule]\nview = \"month\"\ndates = [\"2025-12-02\"]\n");

    let assert = postcadence(dir.path())
        .args(["plan", "items.json", "--max-per-day", "3"])
        .assert()
        .success();

    let plan: Value = serde_json::from_slice(&assert.get_output().stdout).expect("plan is json");

    assert_eq!(plan["summary"]["requested"], 5);
    assert_eq!(plan["summary"]["scheduled"], 3);
    assert_eq!(plan["summary"]["overflow"], 2);
    assert_eq!(plan["total_slots"], 3);
    assert_eq!(plan["scheduled"][0]["media_url"], "https://cdn.example/a.jpg");
    assert_eq!(plan["scheduled"][2]["media_type"], "video");
    assert_eq!(
        plan["overflow"],
        json!([
            {"id": 4, "filename": "d.jpg"},
            {"id": 5, "filename": "e.jpg"}
        ])
    );
}

#[test]
fn plan_grouped_keys_follow_schedule_order() {
    let dir = workspace(ITEMS);
    write_config(dir.path(), "");

    let assert = postcadence(dir.path())
        .args([
            "plan",
            "items.json",
            "--start",
            "2025-12-06",
            "--weekdays",
            "0,2",
            "--max-per-day",
            "2",
            "--format",
            "grouped",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let first = stdout.find("\"2025-12-07\"").expect("sunday group");
    let second = stdout.find("\"2025-12-09\"").expect("tuesday group");
    let third = stdout.find("\"2025-12-14\"").expect("next sunday group");
    assert!(first < second && second < third);

    let groups: Value = serde_json::from_str(&stdout).expect("grouped output is json");
    assert_eq!(groups["2025-12-07"].as_array().map(Vec::len), Some(2));
    assert_eq!(groups["2025-12-14"][0]["filename"], "e.jpg");
}

#[test]
fn dates_lists_generated_sequence() {
    let dir = workspace("[]");
    write_config(dir.path(), "");

    postcadence(dir.path())
        .args([
            "dates",
            "--count",
            "5",
            "--start",
            "2025-12-01",
            "--weekdays",
            "1,3,5",
            "--max-per-day",
            "2",
        ])
        .assert()
        .success()
        .stdout("2025-12-01\n2025-12-03\n2025-12-05\n");
}

#[test]
fn dates_ignores_month_view_setting() {
    let dir = workspace("[]");
    write_config(dir.path(), "[schedule]\nview = \"month\"\n");

    postcadence(dir.path())
        .args(["dates", "--count", "2", "--start", "2025-12-01", "--max-per-day", "1"])
        .assert()
        .success()
        .stdout("2025-12-01\n2025-12-03\n");

    postcadence(dir.path())
        .args(["plan", "items.json"])
        .assert()
        .code(2)
        .stderr(contains("schedule.dates"));
}

#[test]
fn environment_overrides_config_file() {
    let dir = workspace(ITEMS);
    write_config(dir.path(), "[schedule]\nmax_per_day = 1\n");

    let assert = postcadence(dir.path())
        .env("POSTCADENCE__SCHEDULE__MAX_PER_DAY", "5")
        .args(["plan", "items.json", "--start", "2025-12-01"])
        .assert()
        .success();

    let plan: Value = serde_json::from_slice(&assert.get_output().stdout).expect("plan is json");
    assert_eq!(plan["summary"]["dates_used"], 1);
    assert_eq!(plan["total_slots"], 5);
}

#[test]
fn zero_capacity_is_a_configuration_error() {
    let dir = workspace(ITEMS);
    write_config(dir.path(), "");

    postcadence(dir.path())
        .args(["plan", "items.json", "--max-per-day", "0"])
        .assert()
        .code(2)
        .stderr(contains("schedule.max_per_day"));
}

#[test]
fn malformed_items_are_rejected() {
    let dir = workspace(r#"{"id": 1}"#);
    write_config(dir.path(), "");

    postcadence(dir.path())
        .args(["plan", "items.json"])
        .assert()
        .code(2)
        .stderr(contains("invalid content items"));
}

#[test]
fn missing_items_file_fails() {
    let dir = workspace("[]");
    write_config(dir.path(), "");

    postcadence(dir.path())
        .args(["plan", "absent.json"])
        .assert()
        .code(1)
        .stderr(contains("failed to read"));
}
