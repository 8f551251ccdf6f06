use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn quiet_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[display]\ncolor_output = false\npause_after_action = false\n",
    )
    .unwrap();
    path
}

#[test]
fn help_flag_prints_usage() {
    for flag in ["--help", "-h"] {
        Command::cargo_bin("logsift")
            .unwrap()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"))
            .stdout(predicate::str::contains("--sample"));
    }
}

#[test]
fn sample_flag_preloads_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = quiet_config(&dir);

    Command::cargo_bin("logsift")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--sample")
        .write_stdin("6\n3\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Logs: 15"))
        .stdout(predicate::str::contains(
            "Key: \"Failed to connect to database\" -> Count: 4",
        ))
        .stdout(predicate::str::contains("Exiting... Thank you!"));
}

#[test]
fn missing_config_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fresh").join("config.toml");

    Command::cargo_bin("logsift")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--no-color")
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Smart Log Analyzer"));

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[display]"));
    assert!(written.contains("case_sensitive = true"));
}

#[test]
fn search_over_piped_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = quiet_config(&dir);

    Command::cargo_bin("logsift")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n2024-03-01 12:00:00\nINFO\naaa\n4\naa\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Keyword 'aa' found 2 time(s) in log messages.",
        ));
}
