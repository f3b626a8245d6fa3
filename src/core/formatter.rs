//! Line assembly
//!
//! A line is `<time><level><name><caller> > <message><newline>`, every
//! prefix segment optional except the name. With colors enabled the whole
//! line, newline included, is wrapped in the level's color and a reset.

use super::caller::CallSite;
use super::log_level::LogLevel;
use super::options::LoggerConfig;

/// Width of the severity tag column.
pub const LEVEL_TAG_WIDTH: usize = 7;

/// Everything needed to render one line, borrowed from a logger snapshot.
pub struct LineFormatter<'a> {
    config: &'a LoggerConfig,
    tree_name: &'a str,
}

impl<'a> LineFormatter<'a> {
    pub fn new(config: &'a LoggerConfig, tree_name: &'a str) -> Self {
        Self { config, tree_name }
    }

    pub fn format(&self, level: LogLevel, site: CallSite, message: &str, newline: bool) -> String {
        let time = self.time_segment();
        let tag = self.level_segment(level);
        let name = self.name_segment();
        let caller = self.caller_segment(site);
        let postfix = if newline { "\n" } else { "" };

        let line = format!("{}{}{}{} > {}{}", time, tag, name, caller, message, postfix);

        if self.config.use_color {
            self.config.colors.get(level).paint(&line)
        } else {
            line
        }
    }

    fn time_segment(&self) -> String {
        if !self.config.show_time {
            return String::new();
        }
        self.config.timestamp_format.format_now()
    }

    fn level_segment(&self, level: LogLevel) -> String {
        if !self.config.show_level {
            return String::new();
        }
        format!(" |{:<width$}| ", level.to_str(), width = LEVEL_TAG_WIDTH)
    }

    fn name_segment(&self) -> String {
        match pad_width(self.config.name_layout.pad) {
            Some(width) => format!(" [{:<width$}] ", self.tree_name, width = width),
            None => format!(" [{}] ", self.tree_name),
        }
    }

    fn caller_segment(&self, site: CallSite) -> String {
        if !self.config.show_caller {
            return String::new();
        }
        match pad_width(self.config.caller_pad) {
            Some(width) => format!(" {:<width$}", site.to_string(), width = width),
            None => format!(" {}", site),
        }
    }
}

/// Pads of zero or below mean "no padding".
fn pad_width(pad: i32) -> Option<usize> {
    usize::try_from(pad).ok().filter(|&width| width > 0)
}
