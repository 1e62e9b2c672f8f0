//! ---
//! glint_section: "04-command-line"
//! glint_subsection: "tests"
//! glint_type: "test"
//! glint_scope: "code"
//! glint_description: "Black-box tests of the glintctl binary."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

const INPUT: &str = concat!(
    r#"{"ts":1530286522634,"topic":"broadcast","ns":"test","msg":"Oh, hi!"}"#,
    "\n",
    r#"{"ts":1530286522634,"topic":"timing","ns":"test","data":{"ms":7000}}"#,
    "\n",
);

fn glintctl() -> Command {
    let mut cmd = Command::cargo_bin("glintctl").expect("binary built");
    cmd.env_remove("GLINT_CONFIG").env("GLINT_LOG", "off");
    cmd
}

#[test]
fn renders_basic_lines_from_stdin() {
    glintctl()
        .args(["--format", "basic"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(concat!(
            "2018-06-29T15:35:22.634Z 📣 [test] Oh, hi!\n",
            "2018-06-29T15:35:22.634Z ⏱  [test] 7.0s\n",
        ));
}

#[test]
fn uncolored_fancy_without_timestamps() {
    glintctl()
        .args(["--format", "fancy", "--no-ts", "--no-color"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("📣 test Oh, hi!\n⏱  test 7.0s\n");
}

#[test]
fn reads_from_a_file_argument() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("entries.ndjson");
    fs::write(&input, INPUT).expect("write input");

    glintctl()
        .args(["--format", "basic", "--no-ts", "--no-topic"])
        .arg(&input)
        .assert()
        .success()
        .stdout("[test] Oh, hi!\n[test] 7.0s\n");
}

#[test]
fn configuration_file_supplies_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("glint.toml");
    fs::write(
        &config,
        "[format]\nadapter = \"basic\"\n\n[format.options]\nts = false\nns = false\n",
    )
    .expect("write config");

    glintctl()
        .arg("--config")
        .arg(&config)
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("📣 Oh, hi!\n⏱  7.0s\n");
}

#[test]
fn bad_lines_are_skipped_and_fail_the_run() {
    let input = format!(
        "{}\n{{broken\n{}\n",
        r#"{"ts":0,"topic":"gossip","ns":"x","msg":"unknown"}"#,
        r#"{"ts":0,"topic":"ok","ns":"x","msg":"kept"}"#,
    );
    glintctl()
        .args(["--format", "basic", "--no-ts"])
        .write_stdin(input)
        .assert()
        .failure()
        .stdout("✅ [x] kept\n");
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    glintctl()
        .arg(dir.path().join("absent.ndjson"))
        .assert()
        .failure();
}
