//! Main logger implementation

use super::{
    args::{join_args, IntoLogArgs},
    caller::CallSite,
    color::Color,
    error::Result,
    formatter::LineFormatter,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    options::{FileTarget, LoggerConfig, LoggerOption, SecondarySink},
    settings::LoggerSettings,
    sink::SinkHandle,
    timestamp::TimestampFormat,
    tree::{LoggerTree, NodeId},
};
use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal message has been delivered.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Handle to one logger of a tree.
///
/// Handles are cheap to clone; clones refer to the same logger. Every logging
/// call formats and writes synchronously before returning, and never reports
/// sink failures (see [`Logger::metrics`]).
///
/// # Example
///
/// ```
/// use rust_tree_logger::sinks::MemorySink;
/// use rust_tree_logger::{Logger, LoggerOption, SinkHandle};
///
/// let out = MemorySink::new();
/// let root = Logger::new_root(
///     "svc",
///     [
///         LoggerOption::TreeName { pad: 0, auto_adjust: true },
///         LoggerOption::PrimarySink(SinkHandle::new(out.clone())),
///     ],
/// );
/// let worker = root.derive("worker", []);
///
/// root.infoln("up");
/// worker.infoln("busy");
/// assert_eq!(out.lines(), vec![" [svc       ]  > up", " [svc.worker]  > busy"]);
/// ```
#[derive(Clone)]
pub struct Logger {
    tree: Arc<LoggerTree>,
    id: NodeId,
}

/// Where one formatted line goes.
struct Route {
    target: Option<SinkHandle>,
    file: Option<FileTarget>,
}

impl Route {
    /// The secondary sink replaces the primary one for messages that meet its
    /// threshold; the file sink receives everything.
    fn select(config: &LoggerConfig, level: LogLevel) -> Self {
        let target = match config.secondary {
            Some(SecondarySink {
                ref sink,
                min_level,
            }) if level >= min_level => Some(sink.clone()),
            _ if level >= config.min_level => Some(config.primary.clone()),
            _ => None,
        };

        Self {
            target,
            file: config.file.clone(),
        }
    }
}

impl Logger {
    /// Create the root of a new tree.
    pub fn new_root<I>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        Self {
            tree: LoggerTree::with_root(name.into(), options),
            id: NodeId::ROOT,
        }
    }

    /// Create a root configured from declarative settings.
    pub fn from_settings(name: impl Into<String>, settings: LoggerSettings) -> Result<Self> {
        Ok(Self::new_root(name, settings.into_options()?))
    }

    /// Create a child that starts from a copy of this logger's configuration.
    ///
    /// `options` are applied on top of the inherited configuration before the
    /// child registers with its ancestors.
    pub fn derive<I>(&self, name: impl Into<String>, options: I) -> Logger
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let id = self.tree.derive(self.id, name.into(), options);
        Logger {
            tree: Arc::clone(&self.tree),
            id,
        }
    }

    /// Derive a child configured from declarative settings.
    pub fn derive_with_settings(
        &self,
        name: impl Into<String>,
        settings: LoggerSettings,
    ) -> Result<Logger> {
        Ok(self.derive(name, settings.into_options()?))
    }

    pub fn name(&self) -> String {
        self.tree.read().node(self.id).name().to_string()
    }

    /// Name as rendered in the bracketed segment.
    pub fn tree_path_name(&self) -> String {
        self.tree.read().tree_path_name(self.id)
    }

    /// Current width of the name column.
    pub fn name_pad(&self) -> i32 {
        self.tree.read().node(self.id).config.name_layout.pad
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<Logger> {
        let parent = self.tree.read().parent(self.id)?;
        Some(self.handle(parent))
    }

    pub fn root(&self) -> Logger {
        self.handle(NodeId::ROOT)
    }

    /// Every logger created below this one, at any depth, in creation order.
    pub fn descendants(&self) -> Vec<Logger> {
        let state = self.tree.read();
        state
            .descendants(self.id)
            .iter()
            .map(|&id| self.handle(id))
            .collect()
    }

    /// Whether both handles refer to the same logger.
    pub fn same_logger(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.tree.read().node(self.id).config.clone()
    }

    /// Apply options after construction.
    ///
    /// Changes affect this logger only and do not trigger a padding
    /// recomputation.
    pub fn configure<I>(&self, options: I)
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        self.tree.write().node_mut(self.id).config.apply(options);
    }

    pub fn min_level(&self) -> LogLevel {
        self.tree.read().node(self.id).config.min_level
    }

    pub fn set_min_level(&self, level: LogLevel) {
        self.configure([LoggerOption::MinLevel(level)]);
    }

    pub fn set_output(&self, sink: SinkHandle) {
        self.configure([LoggerOption::PrimarySink(sink)]);
    }

    pub fn set_secondary_output(&self, sink: SinkHandle, min_level: LogLevel) {
        self.configure([LoggerOption::SecondarySink { sink, min_level }]);
    }

    /// Whether a message at `level` would reach the primary or secondary sink.
    pub fn enabled(&self, level: LogLevel) -> bool {
        let state = self.tree.read();
        Route::select(&state.node(self.id).config, level)
            .target
            .is_some()
    }

    /// Delivery counters shared by the whole tree.
    pub fn metrics(&self) -> &LoggerMetrics {
        self.tree.metrics()
    }

    /// Close and detach this logger's file sink.
    ///
    /// Other loggers that inherited the same file keep their handle; their
    /// later writes fail silently. Closing a file that is already closed
    /// returns an error; a logger without a file sink returns `Ok(())`.
    pub fn close_file_sink(&self) -> Result<()> {
        let target = self.tree.write().node_mut(self.id).config.file.take();
        match target {
            Some(target) => target.sink.close(),
            None => Ok(()),
        }
    }

    /// Flush every sink this logger writes to.
    pub fn flush(&self) -> Result<()> {
        let config = self.config();
        config.primary.flush()?;
        if let Some(secondary) = config.secondary {
            secondary.sink.flush()?;
        }
        if let Some(file) = config.file {
            file.sink.flush()?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, newline: bool, args: impl IntoLogArgs) {
        let message = join_args(&args.into_log_args());
        self.emit(level, newline, &message, CallSite::capture());
    }

    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.emit(level, false, &message, CallSite::capture());
    }

    #[track_caller]
    pub fn debug(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Debug, false, args);
    }

    #[track_caller]
    pub fn debugln(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Debug, true, args);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Info, false, args);
    }

    #[track_caller]
    pub fn infoln(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Info, true, args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    #[track_caller]
    pub fn warning(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Warning, false, args);
    }

    #[track_caller]
    pub fn warningln(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Warning, true, args);
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warning, args);
    }

    #[track_caller]
    pub fn error(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Error, false, args);
    }

    #[track_caller]
    pub fn errorln(&self, args: impl IntoLogArgs) {
        self.log(LogLevel::Error, true, args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    /// Deliver the message, then terminate the process with [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatal(&self, args: impl IntoLogArgs) -> ! {
        self.log(LogLevel::Fatal, false, args);
        std::process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    pub fn fatalln(&self, args: impl IntoLogArgs) -> ! {
        self.log(LogLevel::Fatal, true, args);
        std::process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.logf(LogLevel::Fatal, args);
        std::process::exit(FATAL_EXIT_CODE)
    }

    fn handle(&self, id: NodeId) -> Logger {
        Logger {
            tree: Arc::clone(&self.tree),
            id,
        }
    }

    fn emit(&self, level: LogLevel, newline: bool, message: &str, site: CallSite) {
        // Format under the read lock so a concurrent registration cannot
        // change the name width halfway through a line.
        let (line, route) = {
            let state = self.tree.read();
            let config = &state.node(self.id).config;
            let tree_name = state.tree_path_name(self.id);
            let line = LineFormatter::new(config, &tree_name).format(level, site, message, newline);
            (line, Route::select(config, level))
        };

        self.deliver(level, line.as_bytes(), route);
    }

    fn deliver(&self, level: LogLevel, bytes: &[u8], route: Route) {
        let metrics = self.tree.metrics();
        // Process exit skips destructors, so buffered sinks are flushed here.
        let fatal = level == LogLevel::Fatal;

        match route.target {
            Some(sink) => {
                if sink.write(bytes).is_ok() {
                    metrics.record_delivered();
                } else {
                    metrics.record_dropped();
                }
                if fatal && sink.flush().is_err() {
                    metrics.record_dropped();
                }
            }
            None => {
                metrics.record_suppressed();
            }
        }

        if let Some(file) = route.file {
            if file.sink.write(bytes).is_ok() {
                metrics.record_file_write();
            } else {
                metrics.record_dropped();
            }
            if (file.flush || fatal) && file.sink.flush().is_err() {
                metrics.record_dropped();
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("id", &self.id)
            .finish()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use rust_tree_logger::prelude::*;
///
/// let root = Logger::builder("svc")
///     .min_level(LogLevel::Debug)
///     .level_tag()
///     .tree_name(0, true)
///     .build();
/// let worker = Logger::builder("worker").caller(20).build_child(&root);
/// assert_eq!(worker.tree_path_name(), "svc.worker");
/// ```
pub struct LoggerBuilder {
    name: String,
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(self, level: LogLevel) -> Self {
        self.option(LoggerOption::MinLevel(level))
    }

    /// Show the `file:line` of each logging call, left-justified to `pad`.
    #[must_use = "builder methods return a new value"]
    pub fn caller(self, pad: i32) -> Self {
        self.option(LoggerOption::Caller { pad })
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp(self, format: TimestampFormat) -> Self {
        self.option(LoggerOption::Timestamp(format))
    }

    /// Prefix lines with a strftime-formatted time.
    #[must_use = "builder methods return a new value"]
    pub fn custom_timestamp(self, format_str: &str) -> Self {
        self.timestamp(TimestampFormat::Custom(format_str.to_string()))
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_tag(self) -> Self {
        self.option(LoggerOption::Level)
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(self) -> Self {
        self.option(LoggerOption::Color)
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_color(self, level: LogLevel, color: Color) -> Self {
        self.option(LoggerOption::LevelColor(level, color))
    }

    #[must_use = "builder methods return a new value"]
    pub fn tree_name(self, pad: i32, auto_adjust: bool) -> Self {
        self.option(LoggerOption::TreeName { pad, auto_adjust })
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(self, sink: SinkHandle) -> Self {
        self.option(LoggerOption::PrimarySink(sink))
    }

    #[must_use = "builder methods return a new value"]
    pub fn secondary_output(self, sink: SinkHandle, min_level: LogLevel) -> Self {
        self.option(LoggerOption::SecondarySink { sink, min_level })
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_output(self, sink: SinkHandle, flush: bool) -> Self {
        self.option(LoggerOption::FileSink { sink, flush })
    }

    /// Append the options described by `settings`.
    pub fn settings(mut self, settings: LoggerSettings) -> Result<Self> {
        self.options.extend(settings.into_options()?);
        Ok(self)
    }

    pub fn options(&self) -> &[LoggerOption] {
        &self.options
    }

    /// Build a new root logger.
    pub fn build(self) -> Logger {
        Logger::new_root(self.name, self.options)
    }

    /// Build a logger derived from `parent`.
    pub fn build_child(self, parent: &Logger) -> Logger {
        parent.derive(self.name, self.options)
    }
}

impl Logger {
    /// Create a builder for a logger named `name`
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
