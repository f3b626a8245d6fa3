//! File logging example
//!
//! Demonstrates copying every line to an append-only file, including lines
//! below the console threshold, and loading logger settings from JSON.
//!
//! Run with: cargo run --example file_logging

use rust_tree_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Tree Logger - File Logging Example ===\n");

    let settings = LoggerSettings::from_json(
        r#"{
            "level": "info",
            "show_level": true,
            "timestamp": "Rfc3339",
            "tree_name": { "pad": 0, "auto_adjust": true },
            "file": { "path": "application.log", "flush": false }
        }"#,
    )?;
    let logger = Logger::from_settings("app", settings)?;
    let worker = logger.derive("worker", [LoggerOption::MinLevel(LogLevel::Warning)]);

    println!("1. Logging to both console and file:");
    logger.infoln("Application started");
    logger.debugln("Loading configuration... (file only)");
    logger.infoln("Configuration loaded successfully");
    logger.warningln("Using default settings for some options");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        worker.infof(format_args!("Processing item {}/5 (file only)\n", i));
        if i == 3 {
            worker.warningln("Item 3 took longer than expected");
        }
    }

    logger.infoln("Application shutting down");
    worker.close_file_sink()?;
    logger.close_file_sink()
        .or_else(|e| match e {
            // Both loggers shared one file, which the worker already closed.
            LoggerError::SinkClosed { .. } => Ok(()),
            other => Err(other),
        })?;

    let metrics = logger.metrics();
    println!(
        "\nDelivered: {}, file writes: {}, dropped: {}",
        metrics.delivered_count(),
        metrics.file_write_count(),
        metrics.dropped_count()
    );
    println!("Logs written to: application.log");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
