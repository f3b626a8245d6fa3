//! ANSI color codes and per-logger color tables

use super::log_level::{LogLevel, LEVEL_COUNT};
use serde::{Deserialize, Serialize};

/// Escape sequence that ends a colored line.
pub const RESET: &str = "\x1b[0m";

/// Terminal color applied to a whole log line.
///
/// Bright variants use the bold attribute (`;1`), which is how most terminals
/// render the high-intensity palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightPurple,
    BrightCyan,
    BrightWhite,
    BackgroundBlack,
    BackgroundRed,
    BackgroundGreen,
    BackgroundYellow,
    BackgroundBlue,
    BackgroundPurple,
    BackgroundCyan,
    BackgroundWhite,
    BackgroundBrightBlack,
    BackgroundBrightRed,
    BackgroundBrightGreen,
    BackgroundBrightYellow,
    BackgroundBrightBlue,
    BackgroundBrightPurple,
    BackgroundBrightCyan,
    BackgroundBrightWhite,
}

impl Color {
    /// The escape sequence that starts this color.
    pub fn code(&self) -> &'static str {
        match self {
            Color::Reset => RESET,
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Purple => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::BrightBlack => "\x1b[30;1m",
            Color::BrightRed => "\x1b[31;1m",
            Color::BrightGreen => "\x1b[32;1m",
            Color::BrightYellow => "\x1b[33;1m",
            Color::BrightBlue => "\x1b[34;1m",
            Color::BrightPurple => "\x1b[35;1m",
            Color::BrightCyan => "\x1b[36;1m",
            Color::BrightWhite => "\x1b[37;1m",
            Color::BackgroundBlack => "\x1b[40m",
            Color::BackgroundRed => "\x1b[41m",
            Color::BackgroundGreen => "\x1b[42m",
            Color::BackgroundYellow => "\x1b[43m",
            Color::BackgroundBlue => "\x1b[44m",
            Color::BackgroundPurple => "\x1b[45m",
            Color::BackgroundCyan => "\x1b[46m",
            Color::BackgroundWhite => "\x1b[47m",
            Color::BackgroundBrightBlack => "\x1b[40;1m",
            Color::BackgroundBrightRed => "\x1b[41;1m",
            Color::BackgroundBrightGreen => "\x1b[42;1m",
            Color::BackgroundBrightYellow => "\x1b[43;1m",
            Color::BackgroundBrightBlue => "\x1b[44;1m",
            Color::BackgroundBrightPurple => "\x1b[45;1m",
            Color::BackgroundBrightCyan => "\x1b[46;1m",
            Color::BackgroundBrightWhite => "\x1b[47;1m",
        }
    }

    /// Wrap `text` in this color and a trailing reset.
    pub fn paint(&self, text: &str) -> String {
        let code = self.code();
        let mut out = String::with_capacity(code.len() + text.len() + RESET.len());
        out.push_str(code);
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

/// One color per severity level.
///
/// The table is plain data: cloning a logger configuration copies it, so a
/// child overriding a color never touches its parent or siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    colors: [Color; LEVEL_COUNT],
}

impl ColorTable {
    pub fn get(&self, level: LogLevel) -> Color {
        self.colors[level.index()]
    }

    pub fn set(&mut self, level: LogLevel, color: Color) {
        self.colors[level.index()] = color;
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            colors: LogLevel::ALL.map(|level| level.default_color()),
        }
    }
}
