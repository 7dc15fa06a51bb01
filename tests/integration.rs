//! Integration tests for codesniff


use assert_cmd::Command;
use harness::{SnippetDir, run_codesniff, run_codesniff_stdin};
use predicates::prelude::*;

#[test]
fn test_stdin_default() {
    let (stdout, _stderr, success) =
        run_codesniff_stdin(&[], Some("def add(a, b):\n    return a + b"));
    assert!(success, "codesniff should succeed");
    assert!(stdout.contains("python"), "should guess python: {}", stdout);
    assert!(stdout.contains("All Code"), "should list the sentinel: {}", stdout);
    assert!(stdout.contains("add"), "should list the function: {}", stdout);
}

#[test]
fn test_file_argument() {
    let dir = SnippetDir::new();
    let path = dir.add_snippet("greet.js", "function greet(name) { return name; }");

    let (stdout, _stderr, success) = run_codesniff(&[path.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("javascript"), "should guess javascript: {}", stdout);
    assert!(stdout.contains("greet"), "should list greet: {}", stdout);
}

#[test]
fn test_json_single_object() {
    let (stdout, _stderr, success) =
        run_codesniff_stdin(&["--json"], Some("def add(a, b):\n    return a + b"));
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["language"], "python");
    assert_eq!(value["functions"][0], "All Code");
    assert_eq!(value["functions"][1], "add");
}

#[test]
fn test_json_multiple_is_array() {
    let dir = SnippetDir::new();
    let a = dir.add_snippet("a.py", "def alpha():\n    pass");
    let b = dir.add_snippet("b.js", "function beta() {}");

    let (stdout, _stderr, success) =
        run_codesniff(&["--json", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let entries = value.as_array().expect("array output");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["language"], "python");
    assert_eq!(entries[1]["language"], "javascript");
    assert!(entries[0]["path"].as_str().unwrap().ends_with("a.py"));
}

#[test]
fn test_language_only() {
    let (stdout, _stderr, success) =
        run_codesniff_stdin(&["--language-only"], Some("#include <iostream>\nint main() {}"));
    assert!(success);
    assert_eq!(stdout.trim(), "cpp");
}

#[test]
fn test_functions_only() {
    let (stdout, _stderr, success) = run_codesniff_stdin(
        &["--functions-only"],
        Some("function zeta() {}\nfunction alpha() {}"),
    );
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["All Code", "alpha", "zeta"]);
}

#[test]
fn test_lang_override() {
    // Force plaintext: the pattern branch has no def shape, so nothing is found
    let (stdout, _stderr, success) = run_codesniff_stdin(
        &["--lang", "plaintext", "--functions-only"],
        Some("def hidden():\n    pass"),
    );
    assert!(success);
    assert_eq!(stdout.trim(), "All Code");
}

#[test]
fn test_invalid_lang_rejected() {
    Command::cargo_bin("codesniff")
        .unwrap()
        .args(["--lang", "cobol"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --lang"));
}

#[test]
fn test_nonexistent_file() {
    let (_stdout, stderr, success) = run_codesniff(&["/nonexistent/snippet.py"]);
    assert!(!success, "should fail on a missing file");
    assert!(stderr.contains("cannot read"), "stderr: {}", stderr);
}

#[test]
fn test_multiple_files_text_output_has_headers() {
    let dir = SnippetDir::new();
    let a = dir.add_snippet("a.py", "def alpha():\n    pass");
    let b = dir.add_snippet("b.js", "function beta() {}");

    let (stdout, _stderr, success) =
        run_codesniff(&[a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("a.py"), "should label first file: {}", stdout);
    assert!(stdout.contains("b.js"), "should label second file: {}", stdout);
    assert!(stdout.contains("alpha"));
    assert!(stdout.contains("beta"));
}

#[test]
fn test_explicit_stdin_dash() {
    let (stdout, _stderr, success) =
        run_codesniff_stdin(&["-", "--language-only"], Some("public class Main {}"));
    assert!(success);
    assert_eq!(stdout.trim(), "java");
}

#[test]
fn test_java_scenario_includes_main() {
    Command::cargo_bin("codesniff")
        .unwrap()
        .args(["--functions-only"])
        .write_stdin("public static void main(String[] args) { }")
        .assert()
        .success()
        .stdout(predicate::str::contains("main"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("codesniff")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("codesniff"));
}

#[test]
fn test_conflicting_flags_rejected() {
    Command::cargo_bin("codesniff")
        .unwrap()
        .args(["--json", "--functions-only"])
        .write_stdin("x")
        .assert()
        .failure();
}
