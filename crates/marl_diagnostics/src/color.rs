//! ANSI color classes for terminal diagnostic output.

/// Escape sequence starting bold red text.
pub const ANSI_RED: &str = "\x1b[31;1m";
/// Escape sequence starting bold yellow text.
pub const ANSI_YELLOW: &str = "\x1b[33;1m";
/// Escape sequence starting bold blue text.
pub const ANSI_BLUE: &str = "\x1b[34;1m";
/// Escape sequence resetting all text attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// The three color classes rendered diagnostics use.
///
/// Red marks error keywords and the snippet caret, yellow marks warning
/// keywords, and blue marks structural decoration (the header divider and
/// file names). No other colors appear in rendered output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorClass {
    /// Bold red: the `error:` keyword and the caret glyph.
    Error,
    /// Bold yellow: the `warning:` keyword.
    Warning,
    /// Bold blue: the divider and file names.
    Info,
}

impl ColorClass {
    /// Returns the escape sequence that starts this color.
    pub fn start(self) -> &'static str {
        match self {
            ColorClass::Error => ANSI_RED,
            ColorClass::Warning => ANSI_YELLOW,
            ColorClass::Info => ANSI_BLUE,
        }
    }
}

/// Wraps `text` in the start sequence for `class` followed by a reset.
pub fn colorize(text: &str, class: ColorClass) -> String {
    format!("{}{}{}", class.start(), text, ANSI_RESET)
}
