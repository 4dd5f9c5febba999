//! End-to-end tests for the `ucprint` binary: stdout bytes, stderr text and
//! exit statuses.

use assert_cmd::Command;
use predicates::prelude::*;

fn ucprint() -> Command {
    let mut cmd = Command::cargo_bin("ucprint").unwrap();
    cmd.env_remove("UCPRINT_LOG");
    cmd
}

#[test]
fn zero_arguments_prints_nothing() {
    ucprint().assert().success().stdout("").stderr("");
}

#[test]
fn concatenates_encodings_with_one_newline() {
    ucprint()
        .args(["41", "e9"])
        .assert()
        .success()
        .stdout("Aé\n");
}

#[test]
fn encodes_every_width() {
    ucprint()
        .args(["41", "e9", "20ac", "1f600"])
        .assert()
        .success()
        .stdout(predicate::eq(b"\x41\xC3\xA9\xE2\x82\xAC\xF0\x9F\x98\x80\n" as &[u8]));
}

#[test]
fn empty_argument_is_a_usage_error() {
    ucprint()
        .args(["41", ""])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Empty argument.\n");
}

#[test]
fn surrogate_stops_with_status_two() {
    ucprint()
        .args(["41", "d800", "42"])
        .assert()
        .code(2)
        .stdout("A")
        .stderr("Invalid Unicode code point: 0xd800\n");
}

#[test]
fn out_of_range_stops_with_status_two() {
    ucprint()
        .arg("110000")
        .assert()
        .code(2)
        .stdout("")
        .stderr("Invalid Unicode code point: 0x110000\n");
}

#[test]
fn malformed_hex_is_a_usage_error() {
    ucprint()
        .args(["41", "xyz"])
        .assert()
        .code(1)
        .stdout("A")
        .stderr("Invalid hexadecimal integer: xyz\n");
}

#[test]
fn negative_value_is_invalid() {
    ucprint()
        .arg("-41")
        .assert()
        .code(2)
        .stderr("Not a positive integer: -41\n");
}

#[test]
fn passthrough_prints_arguments_verbatim() {
    ucprint()
        .args(["--passthrough", "41", "xyz", "-42", "e9"])
        .assert()
        .success()
        .stdout("Axyz-42é\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    ucprint()
        .env("UCPRINT_LOG", "debug")
        .arg("20ac")
        .assert()
        .success()
        .stdout("€\n")
        .stderr(predicate::str::contains("encoded"));
}

#[test]
fn help_exits_cleanly() {
    ucprint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("HEX_CODEPOINT"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    ucprint()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}
