use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_sources(dir: &Path) {
    fs::write(dir.join("dictionary.txt"), "hello\nworld\nhelp\n").unwrap();
    fs::write(dir.join("stop.txt"), "the\n").unwrap();
    fs::write(dir.join("text.txt"), "Helo\nthe\nhello\nwrld\n").unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_bigram-speller");
    Command::new(exe)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run failed")
}

#[test]
fn check_reports_misspelled_words() {

    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let output = run(dir.path(), &["check", "-d", "dictionary.txt", "-s", "stop.txt", "-t", "text.txt", "-n", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![
        "Suggestions for the correction of helo: [hello, help]",
        "Suggestions for the correction of wrld: [world, hello]",
    ]);
}

#[test]
fn config_file_and_output_file() {

    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    fs::write(
        dir.path().join("config.json"),
        r#"{"dictionary": "dictionary.txt", "stop_words": "stop.txt", "text": "text.txt", "suggestions": 1, "format": "json"}"#,
    ).unwrap();

    let output = run(dir.path(), &["check", "-c", "config.json", "-o", "report.jsonl"]);
    assert!(output.status.success());

    let report = fs::read_to_string(dir.path().join("report.jsonl")).unwrap();
    let first: serde_json::Value = serde_json::from_str(report.lines().next().unwrap()).unwrap();
    assert_eq!(first["word"], "helo");
    assert_eq!(first["suggestions"], serde_json::json!(["hello"]));
}

#[test]
fn metadata_prints_counts() {

    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let output = run(dir.path(), &["metadata", "-d", "dictionary.txt", "-s", "stop.txt", "-t", "text.txt"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["characters"], 16);
    assert_eq!(value["words"], 4);
    assert_eq!(value["mistakes"], 2);
}

#[test]
fn missing_dictionary_fails() {

    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let output = run(dir.path(), &["check", "-d", "absent.txt", "-s", "stop.txt", "-t", "text.txt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input could not be read"));
}

#[test]
fn failed_text_read_keeps_previous_report() {

    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    fs::write(dir.path().join("broken.txt"), [0x68, 0xff, 0x0a]).unwrap();
    fs::write(dir.path().join("report.txt"), "earlier report\n").unwrap();

    let output = run(dir.path(), &["check", "-d", "dictionary.txt", "-s", "stop.txt", "-t", "broken.txt", "-o", "report.txt"]);
    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("report.txt")).unwrap(), "earlier report\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input could not be read"));
}
