use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("logs").join("mdqmd.log");
    let input = root.join("page.md");
    fs::write(&input, "Body").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1

[logging]
level = "warn"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdqmd"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(&config_path).arg("single").arg(&input).assert().success();

    // The non-blocking writer is flushed when the process exits.
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("converted"), "log was: {log}");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "version = 1\n[logging]\nlevel = \"trace\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdqmd"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();
}

#[test]
fn test_verbose_flag_emits_debug_to_stderr() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.md");
    fs::write(&input, "Body").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdqmd"));
    cmd.env("XDG_CONFIG_HOME", dir.path());
    cmd.env_remove("RUST_LOG");
    let output = cmd.arg("-v").arg("single").arg(&input).output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no front matter found"), "stderr was: {stderr}");
}

#[test]
fn test_errors_reach_stderr_with_logging_off() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "version = 1\n[logging]\nlevel = \"off\"\n").unwrap();
    let missing = dir.path().join("gone.md");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdqmd"));
    cmd.env_remove("RUST_LOG");
    let output = cmd
        .arg("--config")
        .arg(&config_path)
        .arg("single")
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "stderr was: {stderr}");
    assert!(stderr.contains("gone.md"), "stderr was: {stderr}");
    assert!(!stderr.contains("conversion failed"), "stderr was: {stderr}");
}

#[test]
fn test_unusable_log_directory_is_reported() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let log_file = blocker.join("logs").join("mdqmd.log");
    let input = dir.path().join("page.md");
    fs::write(&input, "Body").unwrap();

    let config_path = dir.path().join("config.toml");
    let config_content =
        format!("version = 1\n[logging]\nfile = \"{}\"\n", log_file.display());
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdqmd"));
    cmd.arg("--config").arg(&config_path).arg("single").arg(&input);
    let output = cmd.output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create log directory"), "stderr was: {stderr}");
    assert!(!dir.path().join("page.qmd").exists());
}
