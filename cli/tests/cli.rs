use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn ascii85() -> Command {
    Command::cargo_bin("ascii85").unwrap()
}

#[test]
fn test_encode_stdin() {
    ascii85()
        .arg("-e")
        .write_stdin("Hello, World!")
        .assert()
        .success()
        .stdout("87cURD_*#4DfTZ)+T");
}

#[test]
fn test_encode_is_default_mode() {
    ascii85()
        .write_stdin(vec![0u8; 8])
        .assert()
        .success()
        .stdout("zz");
}

#[test]
fn test_decode_stdin() {
    ascii85()
        .arg("-d")
        .write_stdin("87cURD\n_*#4D\tfTZ)+T")
        .assert()
        .success()
        .stdout("Hello, World!");
}

#[test]
fn test_decode_invalid_fails() {
    ascii85()
        .arg("-d")
        .write_stdin("Invalid|ASCII85")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid ASCII85 data for decoding"));
}

#[test]
fn test_decode_degenerate_group() {
    ascii85()
        .arg("-d")
        .write_stdin("!!!!!")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    ascii85()
        .arg("-d")
        .arg("--allow-degenerate-groups")
        .write_stdin("!!!!!")
        .assert()
        .success()
        .stdout(vec![0u8; 4]);
}

#[test]
fn test_decode_empty_input() {
    ascii85()
        .arg("-d")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_usage_errors() {
    ascii85().arg("-e").arg("-d").assert().failure();
    ascii85().arg("--incremental").assert().failure();
}

#[test]
fn test_file_round_trip() {
    let temp = tempdir().unwrap();
    let plain_path = temp.path().join("plain.bin");
    let encoded_path = temp.path().join("plain.a85");
    let decoded_path = temp.path().join("decoded.bin");

    let plain: Vec<u8> = (0..=255).cycle().take(10_000).collect();
    fs::write(&plain_path, &plain).unwrap();

    ascii85()
        .arg("-i")
        .arg(&plain_path)
        .arg("-o")
        .arg(&encoded_path)
        .assert()
        .success();

    ascii85()
        .arg("-d")
        .arg("-i")
        .arg(&encoded_path)
        .arg("-o")
        .arg(&decoded_path)
        .assert()
        .success();

    assert_eq!(fs::read(&decoded_path).unwrap(), plain);
}

#[test]
fn test_failed_decode_keeps_output_file() {
    let temp = tempdir().unwrap();
    let out_path = temp.path().join("existing.bin");
    fs::write(&out_path, "previous contents").unwrap();

    ascii85()
        .arg("-d")
        .arg("-o")
        .arg(&out_path)
        .write_stdin("9jqo^z!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ASCII85 data for decoding"));

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "previous contents");
}

#[test]
fn test_missing_input_file() {
    let temp = tempdir().unwrap();

    ascii85()
        .arg("-i")
        .arg(temp.path().join("missing.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
