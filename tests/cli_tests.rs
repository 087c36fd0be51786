//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn typeset() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("typeset"));
    cmd.env_remove("TYPESET_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = typeset();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("typeset"));
}

#[test]
fn test_cli_help_lists_locales() {
    let mut cmd = typeset();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Available"))
        .stdout(predicate::str::contains("\"en-US\""))
        .stdout(predicate::str::contains("--html-entity-type"))
        .stdout(predicate::str::contains("--stdin-filename"));
}

#[test]
fn test_transform_file() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("file.txt");
    fs::write(&file, "Wait... (c) 2024 - done.\n").expect("write input");

    let mut cmd = typeset();
    cmd.args(["--locale=en-US", file.to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout("Wait\u{2026} \u{a9} 2024\u{a0}\u{2014} done.\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unsupported_locale() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("file.txt");
    fs::write(&file, "text").expect("write input");

    let mut cmd = typeset();
    cmd.args(["--locale=xx-YY", file.to_str().expect("utf8 path")]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: locale \"xx-YY\" is not supported."));
}

#[test]
fn test_missing_locale() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("file.txt");
    fs::write(&file, "text").expect("write input");

    let mut cmd = typeset();
    cmd.arg(file.to_str().expect("utf8 path"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: required parameter locale."));
}

#[test]
fn test_stdin_transform() {
    let mut cmd = typeset();
    cmd.args(["--stdin", "--locale=en-US"]).write_stdin("foo");
    cmd.assert().success().stdout("foo");
}

#[test]
fn test_stdin_keeps_multibyte_text() {
    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "ru"]).write_stdin("a\u{2014}b");
    cmd.assert().success().stdout("a\u{2014}b");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("file.txt");

    let mut cmd = typeset();
    cmd.args(["-l", "en-US", file.to_str().expect("utf8 path")]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("{}: no such file.", file.display())));
}

#[test]
fn test_file_argument_required_without_stdin() {
    let mut cmd = typeset();
    cmd.args(["-l", "en-US"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: file isn't specified."))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_non_utf8_file_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("legacy.txt");
    fs::write(&file, [0xcf, 0xf0, 0xe8, 0xe2, 0xe5, 0xf2, b'.', b'.', b'.']).expect("write input");

    let mut cmd = typeset();
    cmd.args(["-l", "ru", file.to_str().expect("utf8 path")]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("{}: is not UTF-8.", file.display())));
}

#[test]
fn test_unsupported_entity_type() {
    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "en-US", "--html-entity-type", "hex"]).write_stdin("x");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: mode \"hex\" is not supported."));
}

#[test]
fn test_html_entity_modes() {
    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "en-US", "--html-entity-type", "name"]).write_stdin("a - b");
    cmd.assert().success().stdout("a&nbsp;&mdash; b");

    let mut cmd = typeset();
    cmd.args([
        "--stdin",
        "-l",
        "en-US",
        "--html-entity-type",
        "digit",
        "--html-entity-only-invisible",
    ])
    .write_stdin("a - b");
    cmd.assert().success().stdout("a&#160;\u{2014} b");
}

#[test]
fn test_disable_and_enable_rules() {
    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "en-US", "-d", "common/*", "-e", "common/symbols/copy"])
        .write_stdin("(c) a - b...");
    cmd.assert().success().stdout("\u{a9} a - b...");
}

#[test]
fn test_config_file_overrides_flags() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("typeset.json");
    fs::write(
        &config,
        r#"{"locale": ["ru"], "disableRule": ["common/punctuation/hellip"], "htmlEntity": {"type": "name"}}"#,
    )
    .expect("write config");

    let mut cmd = typeset();
    cmd.args([
        "--stdin",
        "-l",
        "xx-YY",
        "-d",
        "common/dash/main",
        "--html-entity-type",
        "digit",
        "--config",
        config.to_str().expect("utf8 path"),
    ])
    .write_stdin("a - b...");
    cmd.assert().success().stdout("a&nbsp;&mdash; b...");
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("typeset.json");
    fs::write(&config, r#"{"locale": "en-US"}"#).expect("write config");

    let mut cmd = typeset();
    cmd.env("TYPESET_CONFIG", &config).arg("--stdin").write_stdin("x...");
    cmd.assert().success().stdout("x\u{2026}");
}

#[test]
fn test_config_with_both_only_invisible_spellings() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("typeset.json");
    fs::write(
        &config,
        r#"{"locale": ["ru"], "htmlEntity": {"type": "name", "onlyVisible": true, "onlyInvisible": true}}"#,
    )
    .expect("write config");

    let mut cmd = typeset();
    cmd.args(["--stdin", "--config", config.to_str().expect("utf8 path")]).write_stdin("a - b");
    cmd.assert()
        .success()
        .stdout("a&nbsp;\u{2014} b")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_array_config_is_ignored() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("typeset.json");
    fs::write(&config, r#"["xx-YY", "common/*"]"#).expect("write config");

    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "en-US", "--config", config.to_str().expect("utf8 path")])
        .write_stdin("x...");
    cmd.assert()
        .success()
        .stdout("x\u{2026}")
        .stderr(predicate::str::contains(format!("{}: error parsing.", config.display())));
}

#[test]
fn test_missing_config_is_not_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("absent.json");

    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "en-US", "--config", config.to_str().expect("utf8 path")])
        .write_stdin("foo");
    cmd.assert()
        .success()
        .stdout("foo")
        .stderr(predicate::str::contains(format!("{}: no such file.", config.display())));
}

#[test]
fn test_malformed_config_is_not_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("typeset.json");
    fs::write(&config, "{ locale: ru").expect("write config");

    let mut cmd = typeset();
    cmd.args(["--stdin", "-l", "en-US", "--config", config.to_str().expect("utf8 path")])
        .write_stdin("foo");
    cmd.assert()
        .success()
        .stdout("foo")
        .stderr(predicate::str::contains(format!("{}: error parsing.", config.display())));
}

#[test]
fn test_lint_reports_without_rewriting() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("notes.txt");
    fs::write(&file, "fine\nWait...\n").expect("write input");

    let mut cmd = typeset();
    cmd.args(["--lint", "-l", "en-US", file.to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(file.display().to_string()))
        .stdout(predicate::str::contains("2:5"))
        .stdout(predicate::str::contains("common/punctuation/hellip"))
        .stdout(predicate::str::contains("1 problem"))
        .stdout(predicate::str::contains("Wait\u{2026}").not());
}

#[test]
fn test_lint_reports_entity_rewrites() {
    let mut cmd = typeset();
    cmd.args(["--lint", "--stdin", "-l", "en-US"]).write_stdin("a&nbsp;&nbsp;b  \n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"))
        .stdout(predicate::str::contains("html/entity"))
        .stdout(predicate::str::contains("common/space/delTrailingBlanks"))
        .stdout(predicate::str::contains("common/space/delRepeatSpace").not())
        .stdout(predicate::str::contains("3 problems"));
}

#[test]
fn test_lint_clean_stdin_is_silent() {
    let mut cmd = typeset();
    cmd.args(["--lint", "--stdin", "-l", "en-US", "--stdin-filename", "clean.txt"])
        .write_stdin("Nothing to fix.\n");
    cmd.assert().success().stdout(predicate::str::is_empty());
}
