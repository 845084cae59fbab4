use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pinmap"))
        .args(args)
        .current_dir(dir)
        .env_remove("PINMAP_DBG_LOG_LEVEL")
        .output()
        .unwrap()
}

#[test]
fn test_missing_argument() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &[]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Missing input file\n");
    assert!(!dir.path().join("pinmap.pcf").exists());
}

#[test]
fn test_writes_pcf_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("top.v"),
        "module top(\n    output led // @MAP_IO MY_PIN 5\n);\nendmodule\n"
    ).unwrap();

    let out = run_in(dir.path(), &["top.v"]);
    assert!(out.status.success());

    let pcf = fs::read_to_string(dir.path().join("pinmap.pcf")).unwrap();
    let lines: Vec<_> = pcf.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "set_io --warn-no-port WF_LED 31");
    assert_eq!(lines[8], "set_io --warn-no-port MY_PIN 19");
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("map.txt"), "@MAP_IO A 0\n@MAP_IO B 31\n").unwrap();

    assert!(run_in(dir.path(), &["map.txt"]).status.success());
    let first = fs::read(dir.path().join("pinmap.pcf")).unwrap();
    assert!(run_in(dir.path(), &["map.txt"]).status.success());
    let second = fs::read(dir.path().join("pinmap.pcf")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_nonexistent_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["nope.v"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.v"));
    assert!(!dir.path().join("pinmap.pcf").exists());
}

#[test]
fn test_out_of_range_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("map.txt"), "@MAP_IO OK 3\n@MAP_IO BAD 32\n").unwrap();

    let out = run_in(dir.path(), &["map.txt"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("BAD"));
}

#[test]
fn test_trailing_arguments_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("map.txt"), "@MAP_IO MY_PIN 5\n").unwrap();

    let out = run_in(dir.path(), &["map.txt", "other.txt", "more"]);
    assert!(out.status.success());

    let pcf = fs::read_to_string(dir.path().join("pinmap.pcf")).unwrap();
    assert_eq!(pcf.lines().last(), Some("set_io --warn-no-port MY_PIN 19"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_input_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let name = OsStr::from_bytes(b"map\xff.txt");
    fs::write(dir.path().join(name), "@MAP_IO MY_PIN 5\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_pinmap"))
        .arg(name)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let pcf = fs::read_to_string(dir.path().join("pinmap.pcf")).unwrap();
    assert_eq!(pcf.lines().last(), Some("set_io --warn-no-port MY_PIN 19"));
}
