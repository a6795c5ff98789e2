use std::process::{Command, Output};

const REPORT_PREFIX: &str = "Stream ready - Execution time: ";
const REPORT_SUFFIX: &str = " seconds";

/// Runs the binary from an empty directory so only `envs` configure it.
fn run_executor(envs: &[(&str, &str)]) -> Output {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_executor"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to spawn executor")
}

/// Parses `Stream ready - Execution time: <secs> seconds`, requiring exactly
/// three digits after the decimal point.
fn parse_report_line(line: &str) -> Option<f64> {
    let value = line.strip_prefix(REPORT_PREFIX)?.strip_suffix(REPORT_SUFFIX)?;
    let (whole, frac) = value.split_once('.')?;

    let digits_ok = !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.len() == 3
        && frac.bytes().all(|b| b.is_ascii_digit());

    if !digits_ok {
        return None;
    }
    value.parse().ok()
}

#[test]
fn test_parse_report_line() {
    assert_eq!(
        parse_report_line("Stream ready - Execution time: 0.042 seconds"),
        Some(0.042)
    );
    assert_eq!(
        parse_report_line("Stream ready - Execution time: 0.04 seconds"),
        None
    );
    assert_eq!(
        parse_report_line("Stream ready - Execution time: -1.000 seconds"),
        None
    );
}

#[test]
fn test_small_run_prints_single_report_line() {
    let output = run_executor(&[
        ("STREAM_PROBE__ARRAY_SIZE", "4"),
        ("STREAM_PROBE__ITERATIONS", "2"),
    ]);

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected stdout: {:?}", stdout);

    let secs = parse_report_line(lines[0]).expect("report line has the wrong format");
    assert!(secs.is_finite() && secs >= 0.0);
}

#[test]
fn test_default_run_succeeds() {
    let output = run_executor(&[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert_eq!(stdout.matches(REPORT_PREFIX).count(), 1);
}

#[test]
fn test_allocation_failure_exits_one() {
    let unsatisfiable = (usize::MAX / 4).to_string();
    let output = run_executor(&[("STREAM_PROBE__ARRAY_SIZE", unsatisfiable.as_str())]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert_eq!(stdout, "Memory allocation failed\n");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_zero_iterations_exits_two() {
    let output = run_executor(&[("STREAM_PROBE__ITERATIONS", "0")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).expect("stderr is not UTF-8");
    assert!(stderr.contains("probe.iterations"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = dir.path().join("crates").join("executor");
    std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    std::fs::write(
        config_dir.join("Config.toml"),
        "[probe]\narray_size = 8\niterations = 0\n",
    )
    .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_executor"))
        .current_dir(dir.path())
        .output()
        .expect("Failed to spawn executor");

    // The file is picked up: its zero iteration count is rejected.
    assert_eq!(output.status.code(), Some(2));
}
