//! Basic logger usage example
//!
//! Demonstrates a root logger with optional segments and the plain, line and
//! format variants of each level.
//!
//! Run with: cargo run --example basic_usage

use rust_tree_logger::prelude::*;
use rust_tree_logger::{info, log_args, warning};

fn main() -> Result<()> {
    println!("=== Rust Tree Logger - Basic Usage Example ===\n");

    // Severity tag, call site and a time prefix
    let logger = Logger::builder("app")
        .min_level(LogLevel::Debug)
        .custom_timestamp("%H:%M:%S%.3f")
        .level_tag()
        .caller(18)
        .build();

    println!("1. Logging at different levels:");
    logger.debugln("This is a debug message");
    logger.infoln("This is an info message");
    logger.warningln("This is a warning message");
    logger.errorln("This is an error message");

    println!("\n2. Operands and format strings:");
    logger.infoln(log_args!["listening on port ", 8080]);
    logger.infoln(log_args!["ports", 8080, 8443]);
    info!(logger, "{} workers started\n", 4);
    warning!(logger, "queue at {:.1}%\n", 87.5);

    println!("\n3. Raising the threshold:");
    logger.set_min_level(LogLevel::Warning);
    println!("   Minimum level set to WARNING - debug and info won't show:");
    logger.debugln("Debug message (hidden)");
    logger.infoln("Info message (hidden)");
    logger.warningln("Warning message (visible)");

    println!("\n4. Colors:");
    let colored = Logger::builder("colors")
        .min_level(LogLevel::Debug)
        .level_tag()
        .color()
        .level_color(LogLevel::Info, Color::BrightGreen)
        .build();
    colored.debugln("dim");
    colored.infoln("bright green");
    colored.warningln("yellow");
    colored.errorln("red");

    let metrics = logger.metrics();
    println!(
        "\nDelivered: {}, suppressed: {}",
        metrics.delivered_count(),
        metrics.suppressed_count()
    );

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
