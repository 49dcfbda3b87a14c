use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

const DUMP: &str = r#"{
    "igb1": {
        "device": "igb1",
        "status": "down",
        "macaddr": "aa:bb:cc:dd:ee:ff",
        "is_physical": true,
        "mtu": "9000",
        "media": "autoselect",
        "groups": ["lan"]
    },
    "igb0": {
        "device": "igb0",
        "status": "up",
        "macaddr": "00:11:22:33:44:55",
        "is_physical": true,
        "mtu": "1500",
        "ipv4": [{"ipaddr": "192.0.2.1", "subnetbits": 24, "tunnel": false}]
    }
}"#;

fn write_dump(dir: &Path) -> PathBuf {
    let path = dir.join("interfaces.json");
    fs::write(&path, DUMP).expect("write dump");
    path
}

#[test]
fn list_prints_one_row_per_interface_sorted() {
    let dir = tempdir().expect("tempdir");
    let input = write_dump(dir.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("opn-ifstat"));
    let assert = cmd.arg("list").arg(&input).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");

    let igb0 = stdout.find("- igb0:").expect("igb0 row");
    let igb1 = stdout.find("- igb1:").expect("igb1 row");
    assert!(igb0 < igb1, "rows should be sorted by device name");
    assert!(stdout.contains("mtu=9000"));
    assert!(stdout.contains("ipv4=1"));
}

#[test]
fn list_verbose_adds_media_and_groups() {
    let dir = tempdir().expect("tempdir");
    let input = write_dump(dir.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("opn-ifstat"));
    cmd.arg("list")
        .arg(&input)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("media=autoselect"))
        .stdout(predicate::str::contains("groups=lan"));
}

#[test]
fn list_json_is_an_array_of_rows() {
    let dir = tempdir().expect("tempdir");
    let input = write_dump(dir.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("opn-ifstat"));
    let output = cmd
        .arg("list")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: Value = serde_json::from_slice(&output).expect("valid JSON output");
    let rows = rows.as_array().expect("array output");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["device"], "igb0");
    assert_eq!(rows[1]["status"], "down");
}
