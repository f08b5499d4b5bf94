//! Tests for the glyphdex CLI:
//! - Python module output (default)
//! - Plain output (-t plain)
//! - Config file and flag overrides
//! - Output to file (-o)
//! - Fatal errors on missing files and reformatted markers

use std::path::PathBuf;
use std::process::Command;

// ============================================================================
// Helper functions
// ============================================================================

/// Get absolute path to a test fixture file.
fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("tests").join("fixtures").join(name)
}

fn source_args() -> Vec<String> {
    [
        ("--unicode-data", "UnicodeData.txt"),
        ("--emoji-data", "emoji-data.txt"),
        ("--math-data", "MathClassEx.txt"),
        ("--annotations", "en.xml"),
    ]
    .into_iter()
    .flat_map(|(flag, name)| {
        [
            flag.to_string(),
            fixture_path(name).to_string_lossy().into_owned(),
        ]
    })
    .collect()
}

/// Run glyphdex with the fixture sources plus `extra`; return (exit_code, stdout, stderr).
fn run_glyphdex(extra: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_glyphdex"))
        .args(source_args())
        .args(extra)
        .arg("-q")
        .output()
        .expect("Failed to execute glyphdex");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_default_python_module() {
    let (code, stdout, stderr) = run_glyphdex(&[]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "emoji_list=\"\"\"+ plus sign\n\
         \u{0627} arabic letter alef\n\
         \u{270B} raised hand\n\
         \u{2764} heavy black heart\n\
         \u{1F600} grinning face <small>(face, grin)</small>\n\
         \"\"\"\n\
         \n\
         skin_tone_selectable_emojis={'\u{270B}'}\n"
    );
}

#[test]
fn test_plain_format() {
    let (code, stdout, _) = run_glyphdex(&["-t", "plain"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "+ plus sign");
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "\u{270B}");
}

#[test]
fn test_config_and_flags() {
    let config = fixture_path("config.json");
    let (code, stdout, _) = run_glyphdex(&[
        "-c",
        &config.to_string_lossy(),
        "--directional-marks",
        "-t",
        "plain",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\u{200E}\u{0627} Arabic Letter Alef\n"));
    assert!(stdout.contains("\u{1F600} Grinning Face (face, grin)\n"));
    assert!(stdout.contains("+ Plus Sign\n"));
}

#[test]
fn test_output_to_file() {
    let outfile = std::env::temp_dir().join(format!("glyphdex-test-{}.py", std::process::id()));
    let (code, stdout, _) = run_glyphdex(&["-o", &outfile.to_string_lossy()]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());

    let written = std::fs::read_to_string(&outfile).unwrap();
    let _ = std::fs::remove_file(&outfile);
    assert!(written.starts_with("emoji_list=\"\"\""));
    assert!(written.ends_with("skin_tone_selectable_emojis={'\u{270B}'}\n"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_source_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_glyphdex"))
        .args(["--unicode-data", "/nonexistent/UnicodeData.txt"])
        .args(["--emoji-data", "/nonexistent/emoji-data.txt"])
        .args(["--math-data", "/nonexistent/MathClassEx.txt"])
        .args(["--annotations", "/nonexistent/en.xml"])
        .output()
        .expect("Failed to execute glyphdex");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read /nonexistent/UnicodeData.txt"));
}

#[test]
fn test_unsupported_encoding() {
    let (code, _, stderr) = run_glyphdex(&["-e", "utf-16"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unsupported text encoding: utf-16"));
}

#[test]
fn test_marker_match_trimmed_still_finds_window() {
    let (code, stdout, _) = run_glyphdex(&["--marker-match", "trimmed", "-t", "plain"]);
    assert_eq!(code, 0);
    assert!(stdout.ends_with("\n\n\u{270B}\n"));
}

#[test]
fn test_debug_logging_reaches_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_glyphdex"))
        .args(source_args())
        .arg("-d")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute glyphdex");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("catalog written"));
    assert!(stderr.contains("read source"));
    assert!(!stderr.contains("logging not initialised"));
}
