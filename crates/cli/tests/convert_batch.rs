use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn mdqmd(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdqmd"));
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_markdown_and_skips_quarto_in_directory() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("a.md"), "Hello").unwrap();
    fs::write(docs.join("b.qmd"), "already done").unwrap();
    fs::write(docs.join("c.txt"), "ignored").unwrap();

    mdqmd(tmp.path())
        .args(["convert", docs.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("b.qmd"))
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("c.txt").not())
        .stdout(predicate::str::contains("Converted: 1  Skipped: 1  Failed: 0"))
        .stdout(predicate::str::contains("OK   mdqmd convert"));

    assert_eq!(
        fs::read_to_string(docs.join("a.qmd")).unwrap(),
        "---\ntitle: \"a\"\nformat: html\n---\n\nHello"
    );
    assert_eq!(fs::read_to_string(docs.join("b.qmd")).unwrap(), "already done");
    assert!(!docs.join("c.qmd").exists());
}

#[test]
fn recursive_flag_descends_into_subdirectories() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("nested")).unwrap();
    fs::write(docs.join("top.md"), "top").unwrap();
    fs::write(docs.join("nested").join("deep.md"), "deep").unwrap();

    mdqmd(tmp.path()).args(["convert", docs.to_str().unwrap()]).assert().success();
    assert!(docs.join("top.qmd").exists());
    assert!(!docs.join("nested").join("deep.qmd").exists());

    mdqmd(tmp.path())
        .args(["convert", "-r", docs.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 2"));
    assert!(docs.join("nested").join("deep.qmd").exists());
}

#[test]
fn excluded_folders_from_config_are_not_walked() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("drafts")).unwrap();
    fs::write(docs.join("drafts").join("wip.md"), "wip").unwrap();
    fs::write(docs.join("keep.md"), "keep").unwrap();

    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[output]\nexcluded_folders = [\"{}\"]\n",
            docs.join("drafts").display()
        ),
    )
    .unwrap();

    mdqmd(tmp.path())
        .args(["--config", cfg.to_str().unwrap(), "convert", "-r", docs.to_str().unwrap()])
        .assert()
        .success();

    assert!(docs.join("keep.qmd").exists());
    assert!(!docs.join("drafts").join("wip.qmd").exists());
}

#[test]
fn absolute_exclusions_apply_to_relative_directory_argument() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(docs.join("drafts")).unwrap();
    fs::write(docs.join("drafts").join("wip.md"), "wip").unwrap();
    fs::write(docs.join("keep.md"), "keep").unwrap();

    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[output]\nexcluded_folders = [\"{}\"]\n",
            docs.join("drafts").display()
        ),
    )
    .unwrap();

    mdqmd(tmp.path())
        .current_dir(&docs)
        .args(["--config", cfg.to_str().unwrap(), "convert", "-r", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 1"));

    assert!(docs.join("keep.qmd").exists());
    assert!(!docs.join("drafts").join("wip.qmd").exists());
}

#[test]
fn single_quarto_file_is_skipped() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("page.qmd");
    fs::write(&file, "done").unwrap();

    mdqmd(tmp.path())
        .args(["convert", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped: 1"));
}

#[test]
fn missing_path_fails() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nowhere");

    mdqmd(tmp.path())
        .args(["convert", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mdqmd convert"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn wrong_extension_fails() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("notes.txt");
    fs::write(&file, "text").unwrap();

    mdqmd(tmp.path())
        .args(["convert", file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mdqmd convert"))
        .stderr(predicate::str::contains(".md extension"));
}
