//! Logger tree example
//!
//! Demonstrates derived loggers, the shared name column and per-branch
//! overrides.
//!
//! Run with: cargo run --example tree_logging

use rust_tree_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Tree Logger - Tree Logging Example ===\n");

    let root = Logger::builder("svc")
        .level_tag()
        .tree_name(0, true)
        .secondary_output(SinkHandle::stderr(), LogLevel::Error)
        .build();

    println!("1. Name column grows as loggers are derived:");
    root.infoln("starting");
    let http = root.derive("http", []);
    http.infoln("listening");
    let db = root.derive("db", []);
    let pool = db.derive("pool", [LoggerOption::MinLevel(LogLevel::Debug)]);
    root.infoln("wider now");
    http.infoln("aligned with the deepest logger");
    pool.debugln("connection 1 opened");

    println!("\n2. A branch with its own width and colors:");
    let audit = root.derive(
        "audit",
        [
            LoggerOption::TreeName {
                pad: 0,
                auto_adjust: false,
            },
            LoggerOption::Color,
            LoggerOption::LevelColor(LogLevel::Info, Color::Purple),
        ],
    );
    audit.infoln("unpadded and purple");
    db.infoln("still padded, never colored");

    println!("\n3. Errors go to stderr through the secondary sink:");
    pool.errorln("connection 2 refused");

    println!("\n4. The tree:");
    for logger in root.descendants() {
        println!("   {} (width {})", logger.tree_path_name(), logger.name_pad());
    }

    root.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
