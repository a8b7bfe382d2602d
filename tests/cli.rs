//! Binary-level tests. Each test runs in its own temp directory and points
//! the font at a missing file so no image is ever written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wordcloud_cmd(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wordcloud").unwrap();
    cmd.current_dir(dir.path())
        .arg("--font")
        .arg(dir.path().join("missing.ttf"));
    cmd
}

#[test]
fn invalid_choice_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    wordcloud_cmd(&dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== WORD CLOUD GENERATOR ==="))
        .stdout(predicate::str::contains("Error: invalid choice: \"7\""));
}

#[test]
fn missing_file_produces_no_output() {
    let dir = TempDir::new().unwrap();
    wordcloud_cmd(&dir)
        .write_stdin("2\nno_such_file.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: file not found: no_such_file.txt"))
        .stdout(predicate::str::contains("Unique words processed").not());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn stopword_only_file_reports_render_failure() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("stop.txt"), "и он в а\n").unwrap();
    wordcloud_cmd(&dir)
        .write_stdin("2\nstop.txt\nresult\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique words processed: 0"))
        .stdout(predicate::str::contains(
            "Error creating word cloud: no words left to draw after filtering",
        ));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn sample_text_summary() {
    let dir = TempDir::new().unwrap();
    wordcloud_cmd(&dir)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique words processed: 28"))
        .stdout(predicate::str::contains("Top 5 words: python (2)"))
        .stdout(predicate::str::contains("Error creating word cloud"));
    assert!(!dir.path().join("output").join("sample_wordcloud.png").exists());
}

#[test]
fn output_dir_flag_and_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("wordcloud.config.json"),
        r#"{"max_words": 10, "title": null}"#,
    )
    .unwrap();
    wordcloud_cmd(&dir)
        .args(["--output-dir", "clouds"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique words processed: 28"));
    assert!(!dir.path().join("clouds").exists());
}

#[test]
fn invalid_config_is_a_startup_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
    wordcloud_cmd(&dir)
        .args(["--config", "bad.json"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid config JSON"));
}
