//! Property-based tests for rust_tree_logger using proptest

use proptest::prelude::*;
use rust_tree_logger::prelude::*;
use rust_tree_logger::{join_args, Color};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Black),
        Just(Color::Red),
        Just(Color::Green),
        Just(Color::Yellow),
        Just(Color::Blue),
        Just(Color::Purple),
        Just(Color::Cyan),
        Just(Color::White),
        Just(Color::BrightRed),
        Just(Color::BackgroundBlue),
    ]
}

/// A tree shape: for each new node, the index of an existing node to derive from.
fn tree_shape() -> impl Strategy<Value = Vec<(prop::sample::Index, String)>> {
    prop::collection::vec((any::<prop::sample::Index>(), "[a-z]{1,12}"), 1..24)
}

fn build_tree(root_name: &str, shape: &[(prop::sample::Index, String)]) -> Vec<Logger> {
    let root = Logger::new_root(
        root_name,
        [
            LoggerOption::TreeName {
                pad: 0,
                auto_adjust: true,
            },
            LoggerOption::PrimarySink(SinkHandle::new(MemorySink::new())),
        ],
    );
    let mut loggers = vec![root];
    for (parent, name) in shape {
        let parent = loggers[parent.index(loggers.len())].clone();
        loggers.push(parent.derive(name.as_str(), []));
    }
    loggers
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a < b, a.index() < b.index());
        prop_assert_eq!(a == b, a.index() == b.index());
    }
}

// ============================================================================
// Tree Tests
// ============================================================================

proptest! {
    /// Every auto-adjusted logger ends up exactly as wide as the widest path.
    #[test]
    fn test_shared_width_is_widest_path(
        root_name in "[a-z]{1,8}",
        shape in tree_shape(),
    ) {
        let loggers = build_tree(&root_name, &shape);
        let widest = loggers
            .iter()
            .map(|l| l.tree_path_name().chars().count() as i32)
            .max()
            .unwrap();

        for logger in &loggers {
            prop_assert_eq!(logger.name_pad(), widest);
        }
    }

    /// The root's descendant list holds every other logger, in creation order.
    #[test]
    fn test_root_sees_every_descendant(shape in tree_shape()) {
        let loggers = build_tree("root", &shape);
        let descendants = loggers[0].descendants();

        prop_assert_eq!(descendants.len(), loggers.len() - 1);
        for (seen, created) in descendants.iter().zip(loggers.iter().skip(1)) {
            prop_assert!(seen.same_logger(created));
        }
    }

    /// A logger appears in the descendant list of each of its ancestors.
    #[test]
    fn test_every_ancestor_knows_its_descendants(shape in tree_shape()) {
        let loggers = build_tree("root", &shape);

        for logger in &loggers {
            let mut ancestor = logger.parent();
            while let Some(current) = ancestor {
                prop_assert!(current.descendants().iter().any(|d| d.same_logger(logger)));
                ancestor = current.parent();
            }
        }
    }

    /// Tree path names are the dotted chain of bare names.
    #[test]
    fn test_tree_path_is_dotted_chain(shape in tree_shape()) {
        let loggers = build_tree("root", &shape);

        for logger in &loggers {
            let mut names = vec![logger.name()];
            let mut ancestor = logger.parent();
            while let Some(current) = ancestor {
                names.push(current.name());
                ancestor = current.parent();
            }
            names.reverse();
            prop_assert_eq!(logger.tree_path_name(), names.join("."));
        }
    }

    /// Overriding a color on one logger never changes any other logger.
    #[test]
    fn test_color_override_is_local(
        shape in tree_shape(),
        target in any::<prop::sample::Index>(),
        level in any_level(),
        color in any_color(),
    ) {
        let loggers = build_tree("root", &shape);
        let target = target.index(loggers.len());
        loggers[target].configure([LoggerOption::LevelColor(level, color)]);

        for (i, logger) in loggers.iter().enumerate() {
            let expected = if i == target { color } else { level.default_color() };
            prop_assert_eq!(logger.config().colors.get(level), expected);
        }
    }
}

// ============================================================================
// Line Tests
// ============================================================================

proptest! {
    /// `*ln` variants add exactly one trailing newline, plain variants none.
    #[test]
    fn test_newline_variants(message in "[a-zA-Z0-9 ]{0,40}") {
        let out = MemorySink::new();
        let logger = Logger::new_root("p", [LoggerOption::PrimarySink(SinkHandle::new(out.clone()))]);

        logger.info(message.as_str());
        prop_assert_eq!(out.contents(), format!(" [p]  > {}", message));

        out.clear();
        logger.infoln(message.as_str());
        prop_assert_eq!(out.contents(), format!(" [p]  > {}\n", message));
    }

    /// Non-positive pads render the name unpadded.
    #[test]
    fn test_non_positive_pad_is_unpadded(pad in -100i32..=0, name in "[a-z]{1,10}") {
        let out = MemorySink::new();
        let logger = Logger::new_root(
            name.as_str(),
            [
                LoggerOption::TreeName { pad, auto_adjust: false },
                LoggerOption::PrimarySink(SinkHandle::new(out.clone())),
            ],
        );
        logger.info("x");
        prop_assert_eq!(out.contents(), format!(" [{}]  > x", name));
    }

    /// Text operands are never separated; adjacent numbers always are.
    #[test]
    fn test_join_numbers(values in prop::collection::vec(any::<i64>(), 1..10)) {
        let args: Vec<LogArg> = values.iter().copied().map(LogArg::from).collect();
        let expected = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(join_args(&args), expected);
    }

    #[test]
    fn test_join_text(parts in prop::collection::vec("[a-z]{0,5}", 0..10)) {
        let args: Vec<LogArg> = parts.iter().map(LogArg::from).collect();
        prop_assert_eq!(join_args(&args), parts.concat());
    }
}
