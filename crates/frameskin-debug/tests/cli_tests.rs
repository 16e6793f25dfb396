//! Run the `frameskin-debug` binary end to end.

use std::io::Write;
use std::process::{Command, Output};

fn debug_css(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_frameskin-debug"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run frameskin-debug")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn print_css_is_idempotent() {
    let source = "// comment\n foo .p, bar.c,* +c { border-width: 4px 2px; }";
    let first = debug_css(&["--print-css", source]);
    assert!(first.status.success(), "{}", stderr(&first));
    let printed = stdout(&first);
    assert_eq!(printed, "foo .p ,\nbar.c ,\n* + c {\n    border-width: 4px 2px;\n}\n");

    let second = debug_css(&["--print-css", &printed]);
    assert_eq!(stdout(&second), printed);
}

#[test]
fn parse_errors_go_to_stderr() {
    let output = debug_css(&["--print-css", "p } border-width: 2px;"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Expected { but got \"}\""));
}

#[test]
fn query_tree_indices() {
    let output = debug_css(&[
        "--tree=(window (focus (e f)) (nonfocus))",
        "--query-tree-indices=.window > .focus + *",
        "",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "match: 1\n");
}

#[test]
fn print_tree_error() {
    let output = debug_css(&["--print-tree", "--tree=() ()", ""]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Expected EOF but got \"(\""));
}

#[test]
fn css_file_and_compute_style() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, ".tab {{ border-width: 2px; }}\n.tab:last-child {{ border-right-width: 0; }}").unwrap();
    let path = file.path().to_str().unwrap();

    let output = debug_css(&["--css-file", path, "--tree=(bar (tab) (tab))", "--compute-style=1"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "border-bottom-width: 2px;\nborder-left-width: 2px;\nborder-right-width: 0;\nborder-top-width: 2px;\n"
    );
}

#[test]
fn missing_css_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.css");
    let output = debug_css(&["--css-file", missing.to_str().unwrap(), "--print-css"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read stylesheet"));
}
