//! CLI flag contract tests
//!
//! Verifies that CLI flags (--format, --policy, --fail-on, --file,
//! --lexicon, --no-builtin, --output, --no-emoji) work correctly end to end.

use std::path::Path;
use std::process::Command;

fn sentilex_bin() -> String {
    env!("CARGO_BIN_EXE_sentilex").to_string()
}

fn run_sentilex(args: &[&str]) -> (i32, String, String) {
    let mut cmd = Command::new(sentilex_bin());
    // Keep host config out of the contract under test
    cmd.env_remove("SENTILEX_POLICY");
    cmd.env_remove("SENTILEX_LEXICON");
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("sentilex-test-config"));
    for arg in args {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("Failed to run sentilex");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (code, stdout, stderr)
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Invalid JSON")
}

fn write_lexicon(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

// ============================================================================
// analyze: formats
// ============================================================================

#[test]
fn test_analyze_json_output() {
    let (code, stdout, _) = run_sentilex(&[
        "analyze",
        "I love this amazing ice cream!",
        "--format",
        "json",
    ]);
    assert_eq!(code, 0);
    let v = parse_json(&stdout);
    assert_eq!(v["sentiment"], "positive");
    assert_eq!(v["total_score"], 6);
    assert_eq!(v["confidence"], "high");
    assert_eq!(v["words"].as_array().unwrap().len(), 6);
}

#[test]
fn test_analyze_text_output_no_emoji() {
    let (code, stdout, _) = run_sentilex(&["analyze", "what a wonderful day", "--no-emoji"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Sentilex Analysis"));
    assert!(stdout.contains("positive"));
    assert!(!stdout.contains('😊'));
}

#[test]
fn test_analyze_markdown_output() {
    let (code, stdout, _) = run_sentilex(&["analyze", "this is terrible", "--format", "md"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("# Sentilex Report"));
    assert!(stdout.contains("| **Sentiment** | negative |"));
}

#[test]
fn test_analyze_rejects_unknown_format() {
    let (code, _, _) = run_sentilex(&["analyze", "hello", "--format", "sarif"]);
    assert_ne!(code, 0);
}

// ============================================================================
// analyze: policies
// ============================================================================

#[test]
fn test_policy_divergence_on_single_mild_word() {
    // "okay" weighs +1: positive under simple, inside the dead zone otherwise
    let (_, stdout, _) = run_sentilex(&["analyze", "okay", "--format", "json"]);
    assert_eq!(parse_json(&stdout)["sentiment"], "neutral");

    let (_, stdout, _) = run_sentilex(&[
        "analyze", "okay", "--format", "json", "--policy", "simple",
    ]);
    assert_eq!(parse_json(&stdout)["sentiment"], "positive");
}

// ============================================================================
// analyze: --fail-on
// ============================================================================

#[test]
fn test_fail_on_negative_exits_nonzero() {
    let (code, _, _) = run_sentilex(&[
        "analyze",
        "This homework is terrible and boring",
        "--fail-on",
        "negative",
    ]);
    assert_eq!(code, 1, "--fail-on negative should exit 1 on a negative label");
}

#[test]
fn test_fail_on_negative_exits_zero_when_positive() {
    let (code, _, _) = run_sentilex(&[
        "analyze",
        "What a wonderful and beautiful day!",
        "--fail-on",
        "negative",
    ]);
    assert_eq!(code, 0);
}

// ============================================================================
// analyze: batch --file
// ============================================================================

#[test]
fn test_file_batch_one_result_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reviews.txt");
    std::fs::write(
        &input,
        "I love this amazing ice cream!\n\nThis movie was terrible and boring\n",
    )
    .unwrap();

    let (code, stdout, _) = run_sentilex(&[
        "analyze",
        "--file",
        input.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert_eq!(code, 0);
    let v = parse_json(&stdout);
    let results = v.as_array().expect("batch output is an array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["sentiment"], "positive");
    assert_eq!(results[1]["sentiment"], "negative");
}

#[test]
fn test_stdin_reads_one_text() {
    use std::io::Write;
    use std::process::Stdio;

    let mut cmd = Command::new(sentilex_bin());
    cmd.env_remove("SENTILEX_POLICY");
    cmd.env_remove("SENTILEX_LEXICON");
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("sentilex-test-config"));
    cmd.args(["analyze", "--stdin", "--format", "json"]);
    cmd.stdin(Stdio::piped()).stdout(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn sentilex");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"I love this amazing ice cream!")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON from stdin run");
    assert_eq!(v["sentiment"], "positive");
    assert_eq!(v["total_score"], 6);
}

#[test]
fn test_no_input_is_an_error() {
    let (code, _, stderr) = run_sentilex(&["analyze"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no text to analyze"));
}

// ============================================================================
// analyze: custom lexicons
// ============================================================================

#[test]
fn test_custom_lexicon_merges_over_built_in() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon = write_lexicon(dir.path(), "words.toml", "[words]\ncheese = 3\n");

    let (code, stdout, _) = run_sentilex(&[
        "analyze", "cheese", "--lexicon", &lexicon, "--format", "json",
    ]);
    assert_eq!(code, 0);
    let v = parse_json(&stdout);
    assert_eq!(v["total_score"], 3);
    assert_eq!(v["sentiment"], "positive");
}

#[test]
fn test_no_builtin_drops_default_words() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon = write_lexicon(dir.path(), "words.toml", "[words]\ncheese = 3\n");

    // "love" is unknown once the built-in table is skipped
    let (code, stdout, _) = run_sentilex(&[
        "analyze",
        "love",
        "--lexicon",
        &lexicon,
        "--no-builtin",
        "--format",
        "json",
    ]);
    assert_eq!(code, 0);
    let v = parse_json(&stdout);
    assert_eq!(v["total_score"], 0);
    assert_eq!(v["sentiment"], "neutral");
}

#[test]
fn test_invalid_lexicon_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon = write_lexicon(dir.path(), "bad.toml", "not toml {{{");
    let (code, _, _) = run_sentilex(&["analyze", "hello", "--lexicon", &lexicon]);
    assert_ne!(code, 0);
}

// ============================================================================
// analyze: --output
// ============================================================================

#[test]
fn test_output_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    let (code, stdout, _) = run_sentilex(&[
        "analyze",
        "nice",
        "--format",
        "json",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Report written to"));
    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(parse_json(&content)["total_score"], 2);
}

// ============================================================================
// analyze: --explain
// ============================================================================

#[test]
fn test_explain_prints_steps() {
    let (code, stdout, _) = run_sentilex(&[
        "analyze",
        "I love the cake",
        "--explain",
        "--no-emoji",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Step 1: Break into words"));
    assert!(stdout.contains("Step 4: Final result"));
    assert!(stdout.contains("love(+3)"));
}

// ============================================================================
// demo
// ============================================================================

#[test]
fn test_demo_runs_all_sentences() {
    let (code, stdout, _) = run_sentilex(&["demo", "--format", "json"]);
    assert_eq!(code, 0);
    let v = parse_json(&stdout);
    assert_eq!(v.as_array().unwrap().len(), 10);
}

// ============================================================================
// lexicon subcommands
// ============================================================================

#[test]
fn test_lexicon_show_lists_built_in() {
    let (code, stdout, _) = run_sentilex(&["lexicon", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("love"));
    assert!(stdout.contains("terrible"));
}

#[test]
fn test_lexicon_init_then_check_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("starter.toml");

    let (code, stdout, _) = run_sentilex(&["lexicon", "init", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Starter lexicon written"));

    let (code, stdout, _) = run_sentilex(&["lexicon", "check", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("is valid"));
}

#[test]
fn test_lexicon_check_warns_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lexicon(dir.path(), "wild.toml", "[words]\necstatic = 9\n");

    let (code, stdout, _) = run_sentilex(&["lexicon", "check", &path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("outside the conventional"));
}
