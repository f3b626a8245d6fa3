//! Stress tests for concurrent tree use
//!
//! These tests verify:
//! - Loggers can be derived from many threads at once
//! - The shared name width ends up as the widest path in the tree
//! - Lines from concurrent writers are never interleaved

use rust_tree_logger::sinks::MemorySink;
use rust_tree_logger::{LogLevel, Logger, LoggerOption, SinkHandle};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 500;

fn auto_root(out: &MemorySink) -> Logger {
    Logger::new_root(
        "stress",
        [
            LoggerOption::MinLevel(LogLevel::Debug),
            LoggerOption::TreeName {
                pad: 0,
                auto_adjust: true,
            },
            LoggerOption::PrimarySink(SinkHandle::new(out.clone())),
        ],
    )
}

#[test]
fn test_concurrent_derivation() {
    let out = MemorySink::new();
    let root = auto_root(&out);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let root = root.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let branch = root.derive(format!("worker{}", i), []);
                // Deeper chains on odd threads give paths of different widths.
                let mut leaf = branch.clone();
                for depth in 0..(i % 2 + 1) * 3 {
                    leaf = leaf.derive(format!("d{}", depth), []);
                }
                leaf
            })
        })
        .collect();

    let leaves: Vec<Logger> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    let descendants = root.descendants();
    assert_eq!(descendants.len(), THREADS * 4 + THREADS / 2 * 3);

    let widest = descendants
        .iter()
        .map(|l| l.tree_path_name().chars().count())
        .max()
        .expect("descendants") as i32;
    assert_eq!(root.name_pad(), widest);
    for logger in descendants.iter().chain(leaves.iter()) {
        assert_eq!(logger.name_pad(), widest);
    }
}

#[test]
fn test_concurrent_logging_keeps_lines_whole() {
    let out = MemorySink::new();
    let root = auto_root(&out);
    let workers: Vec<Logger> = (0..THREADS)
        .map(|i| root.derive(format!("w{}", i), []))
        .collect();

    let handles: Vec<_> = workers
        .into_iter()
        .enumerate()
        .map(|(i, logger)| {
            thread::spawn(move || {
                for n in 0..LINES_PER_THREAD {
                    logger.infof(format_args!("thread={} n={}\n", i, n));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = out.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in &lines {
        assert!(line.starts_with(" [stress.w"), "malformed line {:?}", line);
        assert_eq!(line.matches(" > ").count(), 1, "interleaved line {:?}", line);
    }
    assert_eq!(
        root.metrics().delivered_count() as usize,
        THREADS * LINES_PER_THREAD
    );
}

#[test]
fn test_logging_while_deriving() {
    let out = MemorySink::new();
    let root = auto_root(&out);
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let root = root.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for n in 0..LINES_PER_THREAD {
                root.debugln(n);
            }
        })
    };
    let deriver = {
        let root = root.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            let mut name = String::from("n");
            for _ in 0..50 {
                root.derive(name.clone(), []);
                name.push('n');
            }
        })
    };

    writer.join().expect("Thread panicked");
    deriver.join().expect("Thread panicked");

    // Every line was rendered with a single, consistent name width.
    for line in out.lines() {
        let name = &line[line.find('[').expect("open")..=line.find(']').expect("close")];
        let padded = name.trim_start_matches('[').trim_end_matches(']');
        assert_eq!(padded.trim_end(), "stress");
        assert!(padded.chars().count() >= "stress".len());
    }
    assert_eq!(root.name_pad(), ("stress.".len() + 50) as i32);
}
