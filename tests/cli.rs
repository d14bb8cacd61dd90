use std::process::{Command, Output};

fn reckon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                              .output()
                                              .unwrap_or_else(|e| panic!("Failed to run reckon: {e}"))
}

#[test]
fn positional_lines_are_evaluated_in_order() {
    let output = reckon(&["x=1+1", "x*5"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.0\n10.0\n");
}

#[test]
fn failing_positional_line_sets_exit_status() {
    let output = reckon(&["1+", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.0\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("*** ERROR: "));
}

#[test]
fn file_and_positional_lines_conflict() {
    let output = reckon(&["--file", "Cargo.toml", "1+1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}

#[test]
fn missing_input_file() {
    let output = reckon(&["--file", "does/not/exist.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}
