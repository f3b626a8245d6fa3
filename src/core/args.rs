//! Argument lists for the plain and `*ln` logging variants
//!
//! A logging call takes any number of operands. Operands are joined with no
//! separator, except that a single space goes between two adjacent operands
//! when neither of them is text. `log_args!["id", 7, 8]` renders as `id7 8`.

use std::borrow::Cow;
use std::fmt;

/// One operand of a logging call, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogArg {
    /// String-like operand; never separated from its neighbours.
    Text(String),
    /// Any other displayable operand (numbers, booleans, custom types).
    Value(String),
}

impl LogArg {
    /// Render a non-text operand through its `Display` impl.
    pub fn value(value: impl fmt::Display) -> Self {
        LogArg::Value(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            LogArg::Text(s) | LogArg::Value(s) => s,
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, LogArg::Text(_))
    }
}

/// Join operands the way the line formatter expects them.
pub fn join_args(args: &[LogArg]) -> String {
    let mut out = String::new();
    let mut previous: Option<&LogArg> = None;
    for arg in args {
        if let Some(prev) = previous {
            if !prev.is_text() && !arg.is_text() {
                out.push(' ');
            }
        }
        out.push_str(arg.as_str());
        previous = Some(arg);
    }
    out
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Text(s.to_string())
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Text(s)
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Text(s.clone())
    }
}

impl From<Cow<'_, str>> for LogArg {
    fn from(s: Cow<'_, str>) -> Self {
        LogArg::Text(s.into_owned())
    }
}

impl From<char> for LogArg {
    fn from(c: char) -> Self {
        LogArg::Text(c.to_string())
    }
}

macro_rules! impl_value_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogArg {
                fn from(v: $ty) -> Self {
                    LogArg::value(v)
                }
            }

            impl IntoLogArgs for $ty {
                fn into_log_args(self) -> Vec<LogArg> {
                    vec![LogArg::value(self)]
                }
            }
        )*
    };
}

/// Anything accepted as the argument list of a plain or `*ln` logging call.
pub trait IntoLogArgs {
    fn into_log_args(self) -> Vec<LogArg>;
}

impl_value_arg!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

impl IntoLogArgs for LogArg {
    fn into_log_args(self) -> Vec<LogArg> {
        vec![self]
    }
}

impl IntoLogArgs for Vec<LogArg> {
    fn into_log_args(self) -> Vec<LogArg> {
        self
    }
}

impl<const N: usize> IntoLogArgs for [LogArg; N] {
    fn into_log_args(self) -> Vec<LogArg> {
        self.into()
    }
}

impl IntoLogArgs for &str {
    fn into_log_args(self) -> Vec<LogArg> {
        vec![LogArg::from(self)]
    }
}

impl IntoLogArgs for String {
    fn into_log_args(self) -> Vec<LogArg> {
        vec![LogArg::Text(self)]
    }
}

impl IntoLogArgs for &String {
    fn into_log_args(self) -> Vec<LogArg> {
        vec![LogArg::from(self)]
    }
}

impl IntoLogArgs for char {
    fn into_log_args(self) -> Vec<LogArg> {
        vec![LogArg::from(self)]
    }
}

impl IntoLogArgs for fmt::Arguments<'_> {
    fn into_log_args(self) -> Vec<LogArg> {
        vec![LogArg::Text(self.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_operands_are_not_separated() {
        let args = vec![LogArg::from("a"), LogArg::from("b"), LogArg::from(1)];
        assert_eq!(join_args(&args), "ab1");
    }

    #[test]
    fn test_adjacent_values_are_separated() {
        let args = vec![LogArg::from(1), LogArg::from(2.5), LogArg::from(true)];
        assert_eq!(join_args(&args), "1 2.5 true");
    }

    #[test]
    fn test_mixed_operands() {
        let args = vec![LogArg::from("id"), LogArg::from(7), LogArg::from(8)];
        assert_eq!(join_args(&args), "id7 8");
    }

    #[test]
    fn test_empty() {
        assert_eq!(join_args(&[]), "");
    }

    #[test]
    fn test_single_values() {
        assert_eq!(join_args(&42u8.into_log_args()), "42");
        assert_eq!(join_args(&"hello".into_log_args()), "hello");
        assert_eq!(join_args(&format_args!("{}-{}", 1, 2).into_log_args()), "1-2");
    }
}
