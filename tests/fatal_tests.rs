//! Fatal severity tests
//!
//! A fatal message terminates the process, so each scenario re-runs this test
//! binary filtered to a single child test and inspects the child's exit status,
//! output and log file.

use rust_tree_logger::sinks::MemorySink;
use rust_tree_logger::{fatal, LogLevel, Logger, LoggerOption, SinkHandle, FATAL_EXIT_CODE};
use std::env;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CHILD_LOG_ENV: &str = "TREE_LOGGER_FATAL_LOG";

fn run_child(test_name: &str, log_path: &Path) -> Output {
    let exe = env::current_exe().expect("current test binary");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_LOG_ENV, log_path)
        .output()
        .expect("Failed to run child process")
}

fn child_log_path() -> Option<String> {
    env::var(CHILD_LOG_ENV).ok()
}

#[test]
fn child_fatalln_to_stdout_and_file() {
    let Some(path) = child_log_path() else {
        return;
    };
    let logger = Logger::new_root(
        "svc",
        [
            LoggerOption::Level,
            LoggerOption::file(path, false).expect("open log file"),
        ],
    );
    logger.fatalln("disk full");
}

#[test]
fn child_fatalf_to_secondary() {
    let Some(path) = child_log_path() else {
        return;
    };
    let logger = Logger::new_root(
        "svc",
        [
            LoggerOption::MinLevel(LogLevel::Fatal),
            LoggerOption::PrimarySink(SinkHandle::new(MemorySink::new())),
            LoggerOption::SecondarySink {
                sink: SinkHandle::stderr(),
                min_level: LogLevel::Error,
            },
            LoggerOption::file(path, false).expect("open log file"),
        ],
    )
    .derive("db", []);
    fatal!(logger, "lost connection after {} retries\n", 3);
}

#[test]
fn test_fatalln_exits_after_delivery() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("fatal.log");

    let output = run_child("child_fatalln_to_stdout_and_file", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(" |FATAL  |  [svc]  > disk full\n"),
        "stdout was {:?}",
        stdout
    );
    // The file sink is buffered and unflushed; exit must not lose the line.
    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert_eq!(content, " |FATAL  |  [svc]  > disk full\n");
}

#[test]
fn test_fatalf_goes_to_secondary_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("fatal.log");

    let output = run_child("child_fatalf_to_secondary", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(" [db ]  > lost connection after 3 retries\n"),
        "stderr was {:?}",
        stderr
    );
    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert_eq!(content, " [db ]  > lost connection after 3 retries\n");
}
