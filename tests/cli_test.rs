mod fixtures;

use fixtures::get_test_fixture_path;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn deep_tests(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deep-tests"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = deep_tests(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("deep-tests"));
    assert!(stdout.contains("--extension"));
    assert!(stdout.contains("--test-marker"));
    assert!(stdout.contains("--strict-cycles"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_cli_fixture_report() {
    let root = get_test_fixture_path("hierarchy");
    let output = deep_tests(&[root.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines.contains(&"shortName=AdminDaoTest, numTests=1, deepTests=6, extended=UserDaoTest"));
    assert!(lines.contains(&"shortName=BaseDaoTest, numTests=3, deepTests=3, extended="));
    assert_eq!(
        lines.last(),
        Some(&"9 total tests, 18 deep tests in 5 source code files")
    );
}

#[test]
fn test_cli_json_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("report.json");
    let root = get_test_fixture_path("hierarchy");

    let output = deep_tests(&[
        root.to_str().unwrap(),
        "--format",
        "json",
        "--output-file",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["file_count"], 5);
    assert_eq!(json["total_deep_tests"], 18);
}

#[test]
fn test_cli_invalid_path() {
    let output = deep_tests(&["/nonexistent/path/that/does/not/exist"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist") || stderr.contains("Invalid arguments"));
}

#[test]
fn test_cli_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();

    let output = deep_tests(&[
        temp_dir.path().to_str().unwrap(),
        "--extends-pattern",
        "class (",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid configuration"));
}

#[test]
fn test_cli_invalid_output_format() {
    let temp_dir = TempDir::new().unwrap();

    let output = deep_tests(&[temp_dir.path().to_str().unwrap(), "--format", "xml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid value") || stderr.contains("possible values"));
}

#[test]
fn test_cli_strict_cycles_exit_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("P.java"), "class P extends Q {\n}\n").unwrap();
    fs::write(temp_dir.path().join("Q.java"), "class Q extends P {\n}\n").unwrap();

    let root = temp_dir.path().to_str().unwrap();

    let lenient = deep_tests(&[root]);
    assert!(lenient.status.success());
    assert_eq!(
        String::from_utf8(lenient.stdout).unwrap(),
        "0 total tests, 0 deep tests in 0 source code files\n"
    );

    let strict = deep_tests(&[root, "--strict-cycles"]);
    assert!(!strict.status.success());
    let stderr = String::from_utf8(strict.stderr).unwrap();
    assert!(stderr.contains("inheritance cycle detected"));
}

#[cfg(unix)]
#[test]
fn test_cli_unreadable_source_exit_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("A.java"), "class A {\n  @Test void a() {}\n}\n").unwrap();
    fs::create_dir(temp_dir.path().join("real")).unwrap();
    std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("Link.java"))
        .unwrap();

    let output = deep_tests(&[temp_dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read file"));
}

#[test]
fn test_cli_config_file_sets_marker() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("Spec.groovy"),
        "class Spec extends Base {\n  def \"works\"() {}\n}\n",
    )
    .unwrap();
    let config = temp_dir.path().join("deep-tests.yml");
    fs::write(&config, "extensions: [groovy]\ntest_marker: 'def \"'\n").unwrap();

    let output = deep_tests(&[
        src.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("shortName=Spec, numTests=1, deepTests=1, extended=Base"));
}
