use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_generate_json_format() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate")
        .arg("-i")
        .arg(r#"{"parameters": [{"name": "a", "values": [1, 2]}, {"name": "b", "values": [10, 20]}], "strength": 2}"#)
        .arg("-f")
        .arg("json");

    cmd.assert().success().stdout(predicate::str::contains("row_count"));
}

#[test]
fn test_generate_dsl_format() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg("a=[1,2] b=[x,y,z] strength=2");

    cmd.assert().success().stdout(predicate::str::contains("Covering array"));
}

#[test]
fn test_generate_dump_format() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg("a=[1,2] b=[x,y,z]").arg("-f").arg("dump");

    cmd.assert().success().stdout(predicate::str::contains("a b"));
}

#[test]
fn test_generate_string_values_render_without_json_quoting() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg("a=[1,2] b=[x,y,z]").arg("-f").arg("dump");

    cmd.assert().success().stdout(predicate::str::contains("\"x\"").not());

    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg("a=[1,2] b=[x,y,z]");

    cmd.assert().success().stdout(predicate::str::contains("\"x\"").not());
}

#[test]
fn test_generate_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, r#"{{"parameters": [{{"name": "a", "values": [0, 1]}}], "strength": 1}}"#).unwrap();

    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg(temp_file.path().to_str().unwrap());

    cmd.assert().success().stdout(predicate::str::contains("Covering array"));
}

#[test]
fn test_examples_command() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("examples");

    cmd.assert().success().stdout(predicate::str::contains("Usage Examples"));
}

#[test]
fn test_invalid_input() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg("not a recognizable request");

    cmd.assert().failure().stderr(predicate::str::contains("Could not parse input format"));
}

#[test]
fn test_generate_rejects_empty_parameters() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("-i").arg(r#"{"parameters": [], "strength": 2}"#);

    cmd.assert().failure().stderr(predicate::str::contains("no parameters"));
}

#[test]
fn test_check_detects_missing_combination() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("check").arg("-i").arg(
        r#"{"parameters": [{"name": "a", "values": [0, 1]}, {"name": "b", "values": [0, 1]}],
            "strength": 2, "rows": [[0, 0], [0, 1], [1, 0]]}"#,
    );

    cmd.assert().failure().stderr(predicate::str::contains("missing combination"));
}

#[test]
fn test_check_passes_on_full_coverage() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("check").arg("-i").arg(
        r#"{"parameters": [{"name": "a", "values": [0, 1]}, {"name": "b", "values": [0, 1]}],
            "strength": 2, "rows": [[0, 0], [0, 1], [1, 0], [1, 1]]}"#,
    );

    cmd.assert().success().stdout(predicate::str::contains("OK"));
}

#[test]
fn test_help_message() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("--help");

    cmd.assert().success().stdout(predicate::str::contains("IPOG t-way covering array generator agent"));
}

#[test]
fn test_generate_help() {
    let mut cmd = Command::cargo_bin("covarray-agent").unwrap();
    cmd.arg("generate").arg("--help");

    cmd.assert().success().stdout(predicate::str::contains("Generate a t-way covering array"));
}
