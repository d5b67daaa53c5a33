//! End-to-end tests: run the built `confscan` binary with piped stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn confscan(args: &[&str], stdin: &str, cwd: &std::path::Path) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_confscan"))
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start confscan");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn blank_answer_scans_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rack.json"), r#"{"rack":1}"#).unwrap();
    std::fs::write(dir.path().join("notes.md"), "# notes").unwrap();

    let output = confscan(&[], "\n", dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Enter path to config folder"));
    assert!(stdout.contains("notes.md\n"));
    assert!(stdout.ends_with("\n\njson configs:\n\n\n{\"rack\":1}\n"));
}

#[test]
fn typo_is_reprompted() {
    let dir = tempfile::tempdir().unwrap();
    let stdin = format!("{}/nope\n{}\n", dir.path().display(), dir.path().display());
    let output = confscan(&[], &stdin, dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("please check for spelling mistakes"));
    assert!(stdout.contains(
        "Enter the path to the config folder / Leave empty to scan this folder:"
    ));
}

#[test]
fn closed_stdin_fails_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = confscan(&[], "", dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input closed"));
}

#[test]
fn schema_failure_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let configs = dir.path().join("configs");
    std::fs::create_dir(&configs).unwrap();
    std::fs::write(configs.join("list.json"), "[1,2]").unwrap();
    let schema = dir.path().join("object.schema.json");
    std::fs::write(&schema, r#"{"type":"object"}"#).unwrap();

    let output = confscan(
        &[
            "--folder",
            configs.to_str().unwrap(),
            "--schema",
            schema.to_str().unwrap(),
        ],
        "",
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("FAIL list.json"));
}
